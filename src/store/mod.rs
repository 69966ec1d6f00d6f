//! # Storage Layer
//!
//! One contract, two backends. The [`BookStore`] trait is the only surface
//! the rest of the crate sees; which implementation sits behind it is
//! decided from the storage path's extension (see [`open_store`]) and is
//! invisible to callers.
//!
//! ## The Contract
//!
//! - `load` returns every stored record. The SQLite backend orders by title
//!   then author; the JSON backend preserves storage order.
//! - `save` replaces the entire stored collection: full overwrite, no
//!   incremental path.
//! - `add` runs the duplicate detector against the current collection and
//!   refuses colliding records, handing back the conflicting one.
//! - `get`/`update`/`delete` signal a missing id through their return value
//!   (`None`/`false`), never through an error.
//!
//! Both backends must produce equivalent [`Book`] values for equivalent
//! input; the migration utility depends on it.
//!
//! ## Implementations
//!
//! - [`json::JsonStore`]: the whole collection round-trips through a single
//!   JSON document on every call. O(n) per write, intentionally: the target
//!   working set is a personal library, and the simplicity pays for itself.
//!   A malformed document degrades to an empty collection instead of
//!   failing.
//! - [`sqlite::SqliteStore`]: three tables (`books`, `tags`, `quotes`) with
//!   cascading deletes; every multi-statement write runs in one
//!   transaction, on a connection scoped to that operation.

use std::path::Path;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::model::Book;

pub mod json;
pub mod sqlite;

/// Outcome of [`BookStore::add`].
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added,
    /// Insertion refused; carries the stored record the candidate collides
    /// with.
    Duplicate(Book),
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

/// Abstract interface for book persistence.
pub trait BookStore {
    /// Returns every stored record.
    fn load(&self) -> Result<Vec<Book>>;

    /// Replaces the entire stored collection.
    fn save(&mut self, books: &[Book]) -> Result<()>;

    /// Inserts a record unless the duplicate detector finds a collision.
    fn add(&mut self, book: Book) -> Result<AddOutcome>;

    /// Exact-id lookup; an absent id is `None`, not an error.
    fn get(&self, id: &str) -> Result<Option<Book>>;

    /// Replaces the record sharing `book.id`; false when no such id exists.
    fn update(&mut self, book: &Book) -> Result<bool>;

    /// Removes the record with that id; false when absent.
    fn delete(&mut self, id: &str) -> Result<bool>;
}

/// Opens the backend selected by the config's path extension.
pub fn open_store(config: &StoreConfig) -> Result<Box<dyn BookStore>> {
    if config.is_sqlite() {
        Ok(Box::new(sqlite::SqliteStore::new(&config.path)?))
    } else {
        Ok(Box::new(json::JsonStore::new(&config.path)?))
    }
}

pub(crate) fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
