//! Pure search and sort over an in-memory collection.
//!
//! Nothing in this module touches storage: commands load a collection
//! through a [`crate::store::BookStore`], run it through these functions,
//! and hand the result to the presentation layer.

use std::cmp::Ordering;

use crate::model::{fold, Book};

/// Independent predicates ANDed together; absent values impose no
/// constraint. String filters match by case-folded substring, or by
/// case-folded equality when `exact` is set. `year` only ever matches
/// exactly.
#[derive(Debug, Default, Clone)]
pub struct SearchCriteria {
    /// Free-text query matched against title OR author.
    pub query: Option<String>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub tag: Option<String>,
    pub isbn: Option<String>,
    pub exact: bool,
}

impl SearchCriteria {
    /// True when no predicate is supplied at all.
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.author.is_none()
            && self.title.is_none()
            && self.year.is_none()
            && self.genre.is_none()
            && self.tag.is_none()
            && self.isbn.is_none()
    }
}

/// Filters the collection, preserving relative input order.
pub fn search(books: &[Book], criteria: &SearchCriteria) -> Vec<Book> {
    let query = active(&criteria.query);
    let author = active(&criteria.author);
    let title = active(&criteria.title);
    let genre = active(&criteria.genre);
    let tag = active(&criteria.tag);
    let isbn = active(&criteria.isbn);

    let matches = |b: &Book| -> bool {
        if let Some(q) = &query {
            if !fold(&b.author).contains(q) && !fold(&b.title).contains(q) {
                return false;
            }
        }
        if !field_matches(&author, &fold(&b.author), criteria.exact) {
            return false;
        }
        if !field_matches(&title, &fold(&b.title), criteria.exact) {
            return false;
        }
        if let Some(year) = criteria.year {
            if b.year != Some(year) {
                return false;
            }
        }
        let genre_value = b.genre.as_deref().map(fold).unwrap_or_default();
        if !field_matches(&genre, &genre_value, criteria.exact) {
            return false;
        }
        if let Some(t) = &tag {
            let folded: Vec<String> = b.tags.iter().map(|x| fold(x)).collect();
            let hit = if criteria.exact {
                folded.iter().any(|x| x == t)
            } else {
                folded.join(" ").contains(t.as_str())
            };
            if !hit {
                return false;
            }
        }
        let isbn_value = b.isbn.as_deref().map(fold).unwrap_or_default();
        if !field_matches(&isbn, &isbn_value, criteria.exact) {
            return false;
        }
        true
    };

    books.iter().filter(|b| matches(b)).cloned().collect()
}

fn active(criterion: &Option<String>) -> Option<String> {
    criterion.as_deref().map(fold).filter(|s| !s.is_empty())
}

fn field_matches(criterion: &Option<String>, value: &str, exact: bool) -> bool {
    match criterion {
        None => true,
        Some(c) if exact => value == c,
        Some(c) => value.contains(c.as_str()),
    }
}

/// Sortable fields. Anything else silently falls back to [`SortField::Title`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Author,
    Year,
    Genre,
    AddedAt,
}

impl SortField {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "author" => Self::Author,
            "year" => Self::Year,
            "genre" => Self::Genre,
            "added_at" => Self::AddedAt,
            _ => Self::Title,
        }
    }
}

// Absent values order before any concrete value; the variant order here is
// what makes the derived `Ord` enforce that.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Absent,
    Num(i64),
    Text(String),
}

fn sort_key(book: &Book, field: SortField) -> SortKey {
    match field {
        SortField::Title => SortKey::Text(fold(&book.title)),
        SortField::Author => SortKey::Text(fold(&book.author)),
        SortField::Year => book
            .year
            .map(|y| SortKey::Num(i64::from(y)))
            .unwrap_or(SortKey::Absent),
        SortField::Genre => book
            .genre
            .as_deref()
            .map(|g| SortKey::Text(fold(g)))
            .unwrap_or(SortKey::Absent),
        SortField::AddedAt => SortKey::Text(fold(&book.added_at)),
    }
}

/// Stable sort by a primary and optional secondary key, input order as the
/// final tiebreak. `reverse` inverts the entire ordering, absent-first rule
/// included.
pub fn sort_books(
    books: &[Book],
    by: SortField,
    secondary: Option<SortField>,
    reverse: bool,
) -> Vec<Book> {
    let mut sorted = books.to_vec();
    sorted.sort_by(|a, b| {
        let mut ord = sort_key(a, by).cmp(&sort_key(b, by));
        if ord == Ordering::Equal {
            if let Some(field) = secondary {
                ord = sort_key(a, field).cmp(&sort_key(b, field));
            }
        }
        if reverse {
            ord.reverse()
        } else {
            ord
        }
    });
    sorted
}
