//! Duplicate detection shared by both storage backends and the CSV import.
//!
//! A candidate collides with a stored record when either:
//!
//! 1. both carry a non-empty ISBN and the ISBNs match case-insensitively
//!    (the strongest identity signal, checked first across the whole
//!    collection), or
//! 2. title and author match case-insensitively **and** the years agree:
//!    both absent, or both present and equal. One absent and one present is
//!    not a match: an edition with a known year is a different record from
//!    one without.
//!
//! The scan is linear and the first match in storage order wins. The target
//! working set is a personal library, so no index is kept.

use crate::model::{fold, Book};

/// Returns the first stored record the candidate collides with, if any.
pub fn find_duplicate<'a>(books: &'a [Book], candidate: &Book) -> Option<&'a Book> {
    let cand_isbn = candidate.isbn.as_deref().map(fold).unwrap_or_default();
    if !cand_isbn.is_empty() {
        let hit = books.iter().find(|b| {
            b.isbn
                .as_deref()
                .map(fold)
                .is_some_and(|isbn| !isbn.is_empty() && isbn == cand_isbn)
        });
        if hit.is_some() {
            return hit;
        }
    }

    let title = fold(&candidate.title);
    let author = fold(&candidate.author);
    books
        .iter()
        .find(|b| fold(&b.title) == title && fold(&b.author) == author && b.year == candidate.year)
}
