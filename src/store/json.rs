use std::fs;
use std::path::{Path, PathBuf};

use super::{ensure_parent_dir, AddOutcome, BookStore};
use crate::dedupe::find_duplicate;
use crate::error::{Result, TomeError};
use crate::model::Book;

/// File-backed store: the whole collection lives in one JSON array and is
/// re-read and rewritten on every operation.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Opens (or seeds) the document at `path`, creating parent directories
    /// and an empty collection on first touch.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        ensure_parent_dir(&path).map_err(TomeError::Io)?;
        let store = Self { path };
        if !store.path.exists() {
            store.write_all(&[])?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // A document that cannot be read as a JSON array of records is treated
    // as empty rather than as an error: availability over strictness for a
    // single-user tool.
    fn read_all(&self) -> Result<Vec<Book>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TomeError::Io)?;
        match serde_json::from_str(&content) {
            Ok(books) => Ok(books),
            Err(err) => {
                log::warn!(
                    "malformed catalog document at {}, treating as empty: {}",
                    self.path.display(),
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    fn write_all(&self, books: &[Book]) -> Result<()> {
        let content = serde_json::to_string_pretty(books).map_err(TomeError::Serialization)?;
        fs::write(&self.path, content).map_err(TomeError::Io)?;
        Ok(())
    }
}

impl BookStore for JsonStore {
    fn load(&self) -> Result<Vec<Book>> {
        self.read_all()
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.write_all(books)
    }

    fn add(&mut self, book: Book) -> Result<AddOutcome> {
        let mut books = self.read_all()?;
        if let Some(existing) = find_duplicate(&books, &book) {
            return Ok(AddOutcome::Duplicate(existing.clone()));
        }
        books.push(book);
        self.write_all(&books)?;
        Ok(AddOutcome::Added)
    }

    fn get(&self, id: &str) -> Result<Option<Book>> {
        Ok(self.read_all()?.into_iter().find(|b| b.id == id))
    }

    fn update(&mut self, book: &Book) -> Result<bool> {
        let mut books = self.read_all()?;
        match books.iter_mut().find(|b| b.id == book.id) {
            Some(slot) => {
                *slot = book.clone();
                self.write_all(&books)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let mut books = self.read_all()?;
        let before = books.len();
        books.retain(|b| b.id != id);
        if books.len() == before {
            return Ok(false);
        }
        self.write_all(&books)?;
        Ok(true)
    }
}
