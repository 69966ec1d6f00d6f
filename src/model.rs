//! # Domain Model: the Book Record
//!
//! This module defines the [`Book`] entity and the normalization rules that
//! keep a collection consistent no matter which path a record arrived by
//! (CLI flags, JSON document, SQLite rows, CSV import).
//!
//! ## Normalization Rules
//!
//! Raw input is chaotic: padded whitespace, empty strings where a field was
//! simply left out, the same tag typed twice with different casing. The
//! [`Book::create`] factory funnels everything through one pipeline:
//!
//! 1. **Required strings** (`title`, `author`): trimmed.
//! 2. **Optional strings** (`genre`, `isbn`): trimmed; an empty result means
//!    "absent" and is stored as `None`, never as `""`.
//! 3. **Optional integers** (`year`, `pages`): absent is distinct from zero;
//!    negative years are treated as absent.
//! 4. **Tags**: trimmed, empties dropped, then deduplicated
//!    case-insensitively; first occurrence wins, original casing kept.
//! 5. **Quotes**: trimmed, empties dropped. Duplicate rejection happens at
//!    append time (see [`Book::add_quote`]), not in the factory, so imported
//!    collections round-trip untouched.
//!
//! ## Identity
//!
//! `id` is a UUID-v4 in its canonical 36-character textual form, assigned
//! once by the factory and immutable afterwards. `added_at` is an ISO-8601
//! UTC timestamp with second precision and a literal `Z` suffix, also set
//! once. Both are plain strings in the model so that every backend and the
//! CSV bridge reproduce them byte-for-byte.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical length of a textual UUID-v4 id.
pub const ID_LEN: usize = 36;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub quotes: Vec<String>,
    pub added_at: String,
}

/// Raw field values for a new record, before normalization.
#[derive(Debug, Default, Clone)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub isbn: Option<String>,
    pub pages: Option<u32>,
    pub tags: Vec<String>,
    pub quotes: Vec<String>,
}

impl Book {
    /// Builds a normalized record, assigning a fresh id and timestamp.
    pub fn create(draft: BookDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title.trim().to_string(),
            author: draft.author.trim().to_string(),
            year: draft.year.filter(|y| *y >= 0),
            genre: draft.genre.as_deref().and_then(normalize_optional),
            isbn: draft.isbn.as_deref().and_then(normalize_optional),
            pages: draft.pages,
            tags: dedupe_tags(draft.tags),
            quotes: draft
                .quotes
                .iter()
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty())
                .collect(),
            added_at: now_iso(),
        }
    }

    /// Appends a quote unless it is empty or a duplicate of a stored one
    /// under whitespace-collapsing and case-folding. Returns whether the
    /// quote was appended.
    pub fn add_quote(&mut self, text: &str) -> bool {
        let quote = text.trim();
        if quote.is_empty() {
            return false;
        }
        let key = normalize_quote(quote);
        if self.quotes.iter().any(|q| normalize_quote(q) == key) {
            return false;
        }
        self.quotes.push(quote.to_string());
        true
    }

    /// Removes the quote at the given 1-based position. Out-of-range
    /// positions are a no-op returning `None`.
    pub fn remove_quote(&mut self, index: usize) -> Option<String> {
        if index < 1 || index > self.quotes.len() {
            return None;
        }
        Some(self.quotes.remove(index - 1))
    }
}

/// Current time as ISO-8601 UTC with second precision and a `Z` suffix.
pub fn now_iso() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Trims a string; an empty result means "absent".
pub fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Case-insensitive key for comparing user-facing strings.
pub fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Trims entries, drops empties, and removes case-insensitive duplicates
/// keeping the first occurrence with its original casing.
pub fn dedupe_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    let mut out = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_string();
        if tag.is_empty() {
            continue;
        }
        let key = fold(&tag);
        if !seen.contains(&key) {
            seen.push(key);
            out.push(tag);
        }
    }
    out
}

/// Splits a raw tag string on `;` or `,` (first separator found wins),
/// falling back to a single entry.
pub fn split_list(raw: &str) -> Vec<String> {
    let parts: Vec<&str> = if raw.contains(';') {
        raw.split(';').collect()
    } else if raw.contains(',') {
        raw.split(',').collect()
    } else {
        vec![raw]
    };
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Coerces a textual integer; anything unparseable is "absent".
pub fn coerce_int<T: std::str::FromStr>(value: &str) -> Option<T> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

fn normalize_quote(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
