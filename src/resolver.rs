//! Turns a user-supplied id (full, prefixed, or wrapped in brackets copied
//! from a listing) into exactly one stored id.
//!
//! A cleaned input at least as long as a canonical id is taken at face value
//! and returned verbatim; whether it actually exists is the caller's problem
//! (checked downstream via `get`). Anything shorter is a prefix: one match
//! resolves, zero is [`Resolution::NotFound`], several are
//! [`Resolution::Ambiguous`] carrying the candidates so the caller can show
//! enough context to disambiguate.

use crate::model::{Book, ID_LEN};

const BRACKETS: [char; 6] = ['[', ']', '{', '}', '(', ')'];

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A single full id, either taken verbatim or expanded from a prefix.
    Resolved(String),
    NotFound,
    /// Multiple records share the prefix; resolution failed.
    Ambiguous(Vec<Book>),
}

/// Resolves `input` against the collection. See the module docs for the
/// outcome rules.
pub fn resolve(books: &[Book], input: &str) -> Resolution {
    let cleaned = clean_id(input);
    if cleaned.chars().count() >= ID_LEN {
        return Resolution::Resolved(cleaned);
    }

    let matches: Vec<&Book> = books.iter().filter(|b| b.id.starts_with(&cleaned)).collect();
    match matches.len() {
        1 => Resolution::Resolved(matches[0].id.clone()),
        0 => Resolution::NotFound,
        _ => Resolution::Ambiguous(matches.into_iter().cloned().collect()),
    }
}

/// Strips surrounding whitespace and a single layer of bracket characters.
fn clean_id(input: &str) -> String {
    let mut cleaned = input.trim();
    if let Some(rest) = cleaned.strip_prefix(BRACKETS) {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix(BRACKETS) {
        cleaned = rest;
    }
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, BookDraft};

    fn book_with_id(id: &str) -> Book {
        let mut book = Book::create(BookDraft {
            title: "T".to_string(),
            author: "A".to_string(),
            ..BookDraft::default()
        });
        book.id = id.to_string();
        book
    }

    const ID_A: &str = "abc12345-0000-4000-8000-000000000001";
    const ID_B: &str = "abc99999-0000-4000-8000-000000000002";

    #[test]
    fn test_unique_prefix_resolves() {
        let books = vec![book_with_id(ID_A), book_with_id(ID_B)];
        assert_eq!(
            resolve(&books, "abc1"),
            Resolution::Resolved(ID_A.to_string())
        );
    }

    #[test]
    fn test_shared_prefix_is_ambiguous() {
        let books = vec![book_with_id(ID_A), book_with_id(ID_B)];
        match resolve(&books, "abc") {
            Resolution::Ambiguous(candidates) => {
                assert_eq!(candidates.len(), 2);
                assert_eq!(candidates[0].id, ID_A);
            }
            other => panic!("expected ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_prefix_is_not_found() {
        let books = vec![book_with_id(ID_A)];
        assert_eq!(resolve(&books, "zzz"), Resolution::NotFound);
    }

    #[test]
    fn test_full_length_input_returned_verbatim() {
        // Existence is not checked here; the caller's `get` does that.
        let missing = "ffffffff-0000-4000-8000-00000000dead";
        assert_eq!(
            resolve(&[], missing),
            Resolution::Resolved(missing.to_string())
        );
    }

    #[test]
    fn test_brackets_and_whitespace_stripped() {
        let books = vec![book_with_id(ID_A)];
        assert_eq!(
            resolve(&books, "  [abc1]  "),
            Resolution::Resolved(ID_A.to_string())
        );
        assert_eq!(
            resolve(&books, &format!("({})", ID_A)),
            Resolution::Resolved(ID_A.to_string())
        );
    }

    #[test]
    fn test_only_one_bracket_layer_stripped() {
        let books = vec![book_with_id(ID_A)];
        // The inner bracket survives, so the prefix no longer matches.
        assert_eq!(resolve(&books, "[[abc1]]"), Resolution::NotFound);
    }
}
