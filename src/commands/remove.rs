use crate::commands::helpers::{fetch_book, Lookup};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore + ?Sized>(store: &mut S, reference: &str) -> Result<CmdResult> {
    let book = match fetch_book(store, reference)? {
        Lookup::Found(book) => book,
        Lookup::Failed(result) => return Ok(result),
    };
    if store.delete(&book.id)? {
        Ok(CmdResult::default().with_message(CmdMessage::success(format!(
            "Deleted: {} ({})",
            book.title, book.author
        ))))
    } else {
        Ok(CmdResult::default().with_message(CmdMessage::warning("Book not found.")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, BookDraft};
    use crate::store::json::JsonStore;
    use tempfile::tempdir;

    #[test]
    fn test_remove_by_prefix() {
        let dir = tempdir().unwrap();
        let mut store = JsonStore::new(dir.path().join("lib.json")).unwrap();
        let book = Book::create(BookDraft {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            ..BookDraft::default()
        });
        store.add(book.clone()).unwrap();

        run(&mut store, &book.id[..8]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_remove_unknown_prefix_reports_not_found() {
        let dir = tempdir().unwrap();
        let mut store = JsonStore::new(dir.path().join("lib.json")).unwrap();
        let result = run(&mut store, "zzz").unwrap();
        assert_eq!(result.messages[0].content, "Book not found.");
    }
}
