use crate::commands::CmdResult;
use crate::error::Result;
use crate::filters::{search, sort_books, SearchCriteria, SortField};
use crate::store::BookStore;

/// Lists the collection: sorted first, then filtered when any criterion is
/// supplied.
pub fn run<S: BookStore + ?Sized>(
    store: &S,
    criteria: &SearchCriteria,
    by: SortField,
    secondary: Option<SortField>,
    reverse: bool,
) -> Result<CmdResult> {
    let books = store.load()?;
    let mut books = sort_books(&books, by, secondary, reverse);
    if !criteria.is_empty() {
        books = search(&books, criteria);
    }
    Ok(CmdResult::default().with_books(books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, BookDraft};
    use crate::store::json::JsonStore;
    use tempfile::tempdir;

    #[test]
    fn test_list_sorts_then_filters() {
        let dir = tempdir().unwrap();
        let mut store = JsonStore::new(dir.path().join("lib.json")).unwrap();
        for (title, author) in [("B", "Same"), ("A", "Same"), ("C", "Other")] {
            store
                .add(Book::create(BookDraft {
                    title: title.to_string(),
                    author: author.to_string(),
                    ..BookDraft::default()
                }))
                .unwrap();
        }

        let criteria = SearchCriteria {
            author: Some("same".to_string()),
            ..SearchCriteria::default()
        };
        let result = run(&store, &criteria, SortField::Title, None, false).unwrap();
        let titles: Vec<&str> = result.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }
}
