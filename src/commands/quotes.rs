use crate::commands::helpers::{fetch_book, Lookup};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

/// Appends a quote to a book; duplicates under whitespace-collapsing and
/// case-folding are skipped.
pub fn add<S: BookStore + ?Sized>(store: &mut S, reference: &str, text: &str) -> Result<CmdResult> {
    let mut book = match fetch_book(store, reference)? {
        Lookup::Found(book) => book,
        Lookup::Failed(result) => return Ok(result),
    };
    if text.trim().is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("Empty quote.")));
    }
    if !book.add_quote(text) {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning("Skipped: that quote is already saved.")));
    }
    store.update(&book)?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Quote added.")))
}

/// Removes the quote at a 1-based position.
pub fn remove<S: BookStore + ?Sized>(
    store: &mut S,
    reference: &str,
    index: usize,
) -> Result<CmdResult> {
    let mut book = match fetch_book(store, reference)? {
        Lookup::Found(book) => book,
        Lookup::Failed(result) => return Ok(result),
    };
    match book.remove_quote(index) {
        Some(removed) => {
            store.update(&book)?;
            Ok(CmdResult::default()
                .with_message(CmdMessage::success(format!("Removed quote: {}", removed))))
        }
        None => Ok(CmdResult::default().with_message(CmdMessage::warning("Invalid quote index."))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, BookDraft};
    use crate::store::json::JsonStore;
    use tempfile::tempdir;

    fn seeded(dir: &tempfile::TempDir) -> (JsonStore, Book) {
        let mut store = JsonStore::new(dir.path().join("lib.json")).unwrap();
        let book = Book::create(BookDraft {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            ..BookDraft::default()
        });
        store.add(book.clone()).unwrap();
        (store, book)
    }

    #[test]
    fn test_quote_duplicate_is_skipped_and_persisted_once() {
        let dir = tempdir().unwrap();
        let (mut store, book) = seeded(&dir);

        add(&mut store, &book.id, "Quote").unwrap();
        let result = add(&mut store, &book.id, "  quote  ").unwrap();
        assert!(result.messages[0].content.contains("already saved"));

        let stored = store.get(&book.id).unwrap().unwrap();
        assert_eq!(stored.quotes, vec!["Quote"]);
    }

    #[test]
    fn test_quote_removal_out_of_range_is_noop() {
        let dir = tempdir().unwrap();
        let (mut store, book) = seeded(&dir);
        add(&mut store, &book.id, "Only one").unwrap();

        let result = remove(&mut store, &book.id, 0).unwrap();
        assert_eq!(result.messages[0].content, "Invalid quote index.");
        let result = remove(&mut store, &book.id, 2).unwrap();
        assert_eq!(result.messages[0].content, "Invalid quote index.");

        assert_eq!(store.get(&book.id).unwrap().unwrap().quotes.len(), 1);

        let result = remove(&mut store, &book.id, 1).unwrap();
        assert!(result.messages[0].content.contains("Only one"));
        assert!(store.get(&book.id).unwrap().unwrap().quotes.is_empty());
    }
}
