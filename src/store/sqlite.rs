use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};

use super::{ensure_parent_dir, AddOutcome, BookStore};
use crate::dedupe::find_duplicate;
use crate::error::{Result, TomeError};
use crate::model::Book;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS books(
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    year INTEGER,
    genre TEXT,
    isbn TEXT,
    pages INTEGER,
    added_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS tags(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    book_id TEXT NOT NULL REFERENCES books(id) ON DELETE CASCADE,
    tag TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS quotes(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    book_id TEXT NOT NULL REFERENCES books(id) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    text TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_books_title ON books(title);
CREATE INDEX IF NOT EXISTS idx_books_author ON books(author);
CREATE INDEX IF NOT EXISTS idx_books_year ON books(year);
CREATE INDEX IF NOT EXISTS idx_tags_book ON tags(book_id);
CREATE INDEX IF NOT EXISTS idx_quotes_book ON quotes(book_id);
";

/// Relational store: one `books` row per record, tag and quote rows keyed by
/// `book_id` with cascading deletes. Each logical operation opens its own
/// connection and releases it on every exit path; multi-statement writes run
/// inside a single transaction.
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path` and ensures the schema.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        ensure_parent_dir(&path).map_err(TomeError::Io)?;
        let store = Self { path };
        let conn = store.connect()?;
        conn.execute_batch(SCHEMA)?;
        log::debug!("sqlite schema ready at {}", store.path.display());
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        // Cascading deletes depend on this; SQLite defaults it off per
        // connection.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }
}

fn row_to_book(row: &rusqlite::Row) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        year: row.get::<_, Option<i64>>(3)?.map(|v| v as i32),
        genre: row.get(4)?,
        isbn: row.get(5)?,
        pages: row.get::<_, Option<i64>>(6)?.map(|v| v as u32),
        added_at: row.get(7)?,
        tags: Vec::new(),
        quotes: Vec::new(),
    })
}

fn load_tags(conn: &Connection, book_id: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT tag FROM tags WHERE book_id = ?1 ORDER BY id")?;
    let tags = stmt
        .query_map([book_id], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(tags)
}

fn load_quotes(conn: &Connection, book_id: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT text FROM quotes WHERE book_id = ?1 ORDER BY position")?;
    let quotes = stmt
        .query_map([book_id], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(quotes)
}

fn load_books(conn: &Connection) -> Result<Vec<Book>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, author, year, genre, isbn, pages, added_at
         FROM books ORDER BY title, author",
    )?;
    let mut books = stmt
        .query_map([], row_to_book)?
        .collect::<rusqlite::Result<Vec<Book>>>()?;
    drop(stmt);
    for book in &mut books {
        book.tags = load_tags(conn, &book.id)?;
        book.quotes = load_quotes(conn, &book.id)?;
    }
    Ok(books)
}

fn insert_book(conn: &Connection, book: &Book) -> Result<()> {
    conn.execute(
        "INSERT INTO books(id, title, author, year, genre, isbn, pages, added_at)
         VALUES(?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            book.id,
            book.title,
            book.author,
            book.year.map(i64::from),
            book.genre,
            book.isbn,
            book.pages.map(i64::from),
            book.added_at,
        ],
    )?;
    insert_lists(conn, book)
}

fn insert_lists(conn: &Connection, book: &Book) -> Result<()> {
    for tag in &book.tags {
        conn.execute(
            "INSERT INTO tags(book_id, tag) VALUES(?1, ?2)",
            params![book.id, tag],
        )?;
    }
    for (i, quote) in book.quotes.iter().enumerate() {
        conn.execute(
            "INSERT INTO quotes(book_id, position, text) VALUES(?1, ?2, ?3)",
            params![book.id, (i + 1) as i64, quote],
        )?;
    }
    Ok(())
}

fn delete_lists(conn: &Connection, book_id: &str) -> Result<()> {
    conn.execute("DELETE FROM tags WHERE book_id = ?1", [book_id])?;
    conn.execute("DELETE FROM quotes WHERE book_id = ?1", [book_id])?;
    Ok(())
}

impl BookStore for SqliteStore {
    fn load(&self) -> Result<Vec<Book>> {
        let conn = self.connect()?;
        load_books(&conn)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM quotes", [])?;
        tx.execute("DELETE FROM tags", [])?;
        tx.execute("DELETE FROM books", [])?;
        for book in books {
            insert_book(&tx, book)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn add(&mut self, book: Book) -> Result<AddOutcome> {
        let mut conn = self.connect()?;
        let existing = load_books(&conn)?;
        if let Some(dup) = find_duplicate(&existing, &book) {
            return Ok(AddOutcome::Duplicate(dup.clone()));
        }
        let tx = conn.transaction()?;
        insert_book(&tx, &book)?;
        tx.commit()?;
        Ok(AddOutcome::Added)
    }

    fn get(&self, id: &str) -> Result<Option<Book>> {
        let conn = self.connect()?;
        let book = conn
            .query_row(
                "SELECT id, title, author, year, genre, isbn, pages, added_at
                 FROM books WHERE id = ?1",
                [id],
                row_to_book,
            )
            .optional()?;
        match book {
            Some(mut book) => {
                book.tags = load_tags(&conn, &book.id)?;
                book.quotes = load_quotes(&conn, &book.id)?;
                Ok(Some(book))
            }
            None => Ok(None),
        }
    }

    fn update(&mut self, book: &Book) -> Result<bool> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let exists: Option<i64> = tx
            .query_row("SELECT 1 FROM books WHERE id = ?1", [&book.id], |row| {
                row.get(0)
            })
            .optional()?;
        if exists.is_none() {
            return Ok(false);
        }
        tx.execute(
            "UPDATE books SET title = ?2, author = ?3, year = ?4, genre = ?5,
                              isbn = ?6, pages = ?7, added_at = ?8
             WHERE id = ?1",
            params![
                book.id,
                book.title,
                book.author,
                book.year.map(i64::from),
                book.genre,
                book.isbn,
                book.pages.map(i64::from),
                book.added_at,
            ],
        )?;
        delete_lists(&tx, &book.id)?;
        insert_lists(&tx, book)?;
        tx.commit()?;
        Ok(true)
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM books WHERE id = ?1", [id])?;
        Ok(changed > 0)
    }
}
