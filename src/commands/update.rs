use crate::commands::helpers::{fetch_book, Lookup};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{dedupe_tags, fold, normalize_optional};
use crate::store::BookStore;

/// Fields to change; `None` means "leave unchanged" (partial update).
#[derive(Debug, Default, Clone)]
pub struct UpdateFields {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub isbn: Option<String>,
    pub pages: Option<u32>,
    pub tags: Option<Vec<String>>,
}

pub fn run<S: BookStore + ?Sized>(
    store: &mut S,
    reference: &str,
    fields: UpdateFields,
) -> Result<CmdResult> {
    let mut book = match fetch_book(store, reference)? {
        Lookup::Found(book) => book,
        Lookup::Failed(result) => return Ok(result),
    };

    let mut notes: Vec<String> = Vec::new();

    if let Some(genre) = &fields.genre {
        if book
            .genre
            .as_deref()
            .is_some_and(|g| fold(g) == fold(genre))
        {
            notes.push(format!("Genre \"{}\" was already set.", genre));
        }
        book.genre = normalize_optional(genre);
    }

    if let Some(pages) = fields.pages {
        if book.pages == Some(pages) {
            notes.push(format!("Page count {} was already set.", pages));
        }
        book.pages = Some(pages);
    }

    if let Some(tags) = fields.tags {
        let provided = dedupe_tags(tags);
        let existing: Vec<String> = book.tags.iter().map(|t| fold(t)).collect();
        let already: Vec<&str> = provided
            .iter()
            .filter(|t| existing.contains(&fold(t)))
            .map(|t| t.as_str())
            .collect();
        if !already.is_empty() {
            notes.push(format!("Tags already present: {}", already.join(", ")));
        }
        book.tags = provided;
    }

    if let Some(title) = &fields.title {
        match normalize_optional(title) {
            Some(title) => book.title = title,
            None => notes.push("Title cannot be empty; kept the old one.".to_string()),
        }
    }
    if let Some(author) = &fields.author {
        match normalize_optional(author) {
            Some(author) => book.author = author,
            None => notes.push("Author cannot be empty; kept the old one.".to_string()),
        }
    }
    if let Some(year) = fields.year {
        book.year = Some(year).filter(|y| *y >= 0);
    }
    if let Some(isbn) = &fields.isbn {
        book.isbn = normalize_optional(isbn);
    }

    let mut result = if store.update(&book)? {
        CmdResult::default()
            .with_message(CmdMessage::success("Book updated."))
            .with_books(vec![book])
    } else {
        CmdResult::default().with_message(CmdMessage::warning("Book not found."))
    };
    for note in notes {
        result.add_message(CmdMessage::info(format!("  • {}", note)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, BookDraft};
    use crate::store::json::JsonStore;
    use tempfile::tempdir;

    fn seeded_store(dir: &tempfile::TempDir) -> (JsonStore, Book) {
        let mut store = JsonStore::new(dir.path().join("lib.json")).unwrap();
        let book = Book::create(BookDraft {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre: Some("sf".to_string()),
            tags: vec!["classic".to_string()],
            ..BookDraft::default()
        });
        store.add(book.clone()).unwrap();
        (store, book)
    }

    #[test]
    fn test_partial_update_leaves_other_fields_alone() {
        let dir = tempdir().unwrap();
        let (mut store, book) = seeded_store(&dir);

        let fields = UpdateFields {
            year: Some(1965),
            ..UpdateFields::default()
        };
        run(&mut store, &book.id, fields).unwrap();

        let updated = store.get(&book.id).unwrap().unwrap();
        assert_eq!(updated.year, Some(1965));
        assert_eq!(updated.title, "Dune");
        assert_eq!(updated.genre, Some("sf".to_string()));
        assert_eq!(updated.tags, vec!["classic"]);
    }

    #[test]
    fn test_update_notes_already_set_values() {
        let dir = tempdir().unwrap();
        let (mut store, book) = seeded_store(&dir);

        let fields = UpdateFields {
            genre: Some("SF".to_string()),
            tags: Some(vec!["Classic".to_string(), "space".to_string()]),
            ..UpdateFields::default()
        };
        let result = run(&mut store, &book.id, fields).unwrap();

        let notes: Vec<&str> = result
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert!(notes.iter().any(|n| n.contains("already set")));
        assert!(notes.iter().any(|n| n.contains("Tags already present: Classic")));

        // The replacement still happened, with the new casing.
        let updated = store.get(&book.id).unwrap().unwrap();
        assert_eq!(updated.genre, Some("SF".to_string()));
        assert_eq!(updated.tags, vec!["Classic", "space"]);
    }

    #[test]
    fn test_update_rejects_empty_title() {
        let dir = tempdir().unwrap();
        let (mut store, book) = seeded_store(&dir);

        let fields = UpdateFields {
            title: Some("   ".to_string()),
            ..UpdateFields::default()
        };
        run(&mut store, &book.id, fields).unwrap();
        assert_eq!(store.get(&book.id).unwrap().unwrap().title, "Dune");
    }
}
