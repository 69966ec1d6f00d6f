//! One-shot bulk copy from the JSON document store into SQLite.
//!
//! Backend equivalence (both stores produce identical [`crate::model::Book`]
//! values for the same input) is what makes this lossless; the copy itself
//! is just load + save.

use crate::error::Result;
use crate::store::json::JsonStore;
use crate::store::sqlite::SqliteStore;
use crate::store::BookStore;

/// Copies every record from `src` into `dst`, replacing whatever `dst`
/// held. Returns the number of records copied.
pub fn migrate_to_sqlite(src: &JsonStore, dst: &mut SqliteStore) -> Result<usize> {
    let books = src.load()?;
    dst.save(&books)?;
    log::info!(
        "migrated {} records from {} to {}",
        books.len(),
        src.path().display(),
        dst.path().display()
    );
    Ok(books.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, BookDraft};
    use tempfile::tempdir;

    #[test]
    fn test_migration_is_lossless() {
        let dir = tempdir().unwrap();
        let mut src = JsonStore::new(dir.path().join("library.json")).unwrap();

        let mut book = Book::create(BookDraft {
            title: "Picnic".to_string(),
            author: "AB Strugatsky".to_string(),
            year: Some(1972),
            genre: Some("fantasy".to_string()),
            pages: Some(256),
            tags: vec!["classic".to_string()],
            ..BookDraft::default()
        });
        book.add_quote("The Zone");
        src.add(book.clone()).unwrap();

        let mut dst = SqliteStore::new(dir.path().join("library.db")).unwrap();
        assert_eq!(migrate_to_sqlite(&src, &mut dst).unwrap(), 1);
        assert_eq!(dst.get(&book.id).unwrap().unwrap(), book);
    }

    #[test]
    fn test_migration_replaces_destination() {
        let dir = tempdir().unwrap();
        let src = JsonStore::new(dir.path().join("empty.json")).unwrap();
        let mut dst = SqliteStore::new(dir.path().join("library.db")).unwrap();
        dst.add(Book::create(BookDraft {
            title: "Stale".to_string(),
            author: "Author".to_string(),
            ..BookDraft::default()
        }))
        .unwrap();

        assert_eq!(migrate_to_sqlite(&src, &mut dst).unwrap(), 0);
        assert!(dst.load().unwrap().is_empty());
    }
}
