//! CSV import/export for the whole collection.
//!
//! One row per book, fixed ten-column schema with a header row; `tags` are
//! joined by `;`, `quotes` by `|`. Import applies a three-way merge per row:
//! a row whose id matches an existing record replaces it outright
//! (upsert-by-id, no duplicate check); otherwise a row colliding under the
//! duplicate detector is silently skipped; otherwise it is inserted. The
//! returned count covers inserts and updates only.
//!
//! `id` and `added_at` from the file are preserved, so exporting and
//! re-importing into an empty store reproduces the collection
//! element-for-element.

use std::path::Path;

use serde::Deserialize;

use crate::dedupe::find_duplicate;
use crate::error::Result;
use crate::model::{coerce_int, Book, BookDraft};
use crate::store::BookStore;

/// Column set, in file order.
pub const CSV_FIELDS: [&str; 10] = [
    "id", "title", "author", "year", "genre", "tags", "isbn", "pages", "quotes", "added_at",
];

const TAG_SEP: char = ';';
const QUOTE_SEP: char = '|';

/// Writes every stored record to `path`; returns the exported count.
pub fn export_csv(store: &dyn BookStore, path: &Path) -> Result<usize> {
    let books = store.load()?;
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_FIELDS)?;
    for book in &books {
        let year = book.year.map(|y| y.to_string()).unwrap_or_default();
        let pages = book.pages.map(|p| p.to_string()).unwrap_or_default();
        let tags = book.tags.join(&TAG_SEP.to_string());
        let quotes = book.quotes.join(&QUOTE_SEP.to_string());
        writer.write_record([
            book.id.as_str(),
            book.title.as_str(),
            book.author.as_str(),
            year.as_str(),
            book.genre.as_deref().unwrap_or(""),
            tags.as_str(),
            book.isbn.as_deref().unwrap_or(""),
            pages.as_str(),
            quotes.as_str(),
            book.added_at.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(books.len())
}

// Every column comes in as raw text; numeric coercion happens afterwards so
// an unparseable year degrades to "absent" instead of failing the row.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: Option<String>,
    title: Option<String>,
    author: Option<String>,
    year: Option<String>,
    genre: Option<String>,
    tags: Option<String>,
    isbn: Option<String>,
    pages: Option<String>,
    quotes: Option<String>,
    added_at: Option<String>,
}

fn split_joined(raw: Option<String>, sep: char) -> Vec<String> {
    raw.map(|s| {
        s.split(sep)
            .filter(|part| !part.trim().is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn row_into_book(row: CsvRow) -> Book {
    let mut book = Book::create(BookDraft {
        title: row.title.unwrap_or_default(),
        author: row.author.unwrap_or_default(),
        year: row.year.as_deref().and_then(coerce_int),
        genre: row.genre,
        isbn: row.isbn,
        pages: row.pages.as_deref().and_then(coerce_int),
        tags: split_joined(row.tags, TAG_SEP),
        quotes: split_joined(row.quotes, QUOTE_SEP),
    });
    if let Some(id) = row.id.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
        book.id = id;
    }
    if let Some(ts) = row
        .added_at
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    {
        book.added_at = ts;
    }
    book
}

/// Merges the rows of `path` into the store; returns how many rows were
/// inserted or updated (skipped duplicates are not counted).
pub fn import_csv(store: &mut dyn BookStore, path: &Path) -> Result<usize> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut books = store.load()?;
    let mut count = 0;
    for record in reader.deserialize::<CsvRow>() {
        let book = row_into_book(record?);
        if let Some(slot) = books.iter_mut().find(|b| b.id == book.id) {
            *slot = book;
            count += 1;
            continue;
        }
        if find_duplicate(&books, &book).is_some() {
            log::debug!("import: skipping duplicate of {} / {}", book.title, book.author);
            continue;
        }
        books.push(book);
        count += 1;
    }
    store.save(&books)?;
    Ok(count)
}
