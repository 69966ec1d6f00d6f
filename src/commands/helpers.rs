use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::resolver::{resolve, Resolution};
use crate::store::BookStore;

/// Outcome of resolving a user-supplied reference to a stored record.
pub(crate) enum Lookup {
    Found(Book),
    /// Resolution failed; the result already carries the messages to print.
    Failed(CmdResult),
}

/// Resolves a full or prefixed id against the store and fetches the record.
pub(crate) fn fetch_book<S: BookStore + ?Sized>(store: &S, reference: &str) -> Result<Lookup> {
    let books = store.load()?;
    let id = match resolve(&books, reference) {
        Resolution::Resolved(id) => id,
        Resolution::NotFound => {
            return Ok(Lookup::Failed(
                CmdResult::default().with_message(CmdMessage::warning("Book not found.")),
            ));
        }
        Resolution::Ambiguous(candidates) => {
            let mut result = CmdResult::default().with_message(CmdMessage::warning(
                "Multiple books match that prefix, be more specific:",
            ));
            for book in &candidates {
                result.add_message(CmdMessage::info(format!(
                    "  {} — {} / {}",
                    book.id, book.title, book.author
                )));
            }
            return Ok(Lookup::Failed(result));
        }
    };

    match store.get(&id)? {
        Some(book) => Ok(Lookup::Found(book)),
        None => Ok(Lookup::Failed(
            CmdResult::default().with_message(CmdMessage::warning("Book not found.")),
        )),
    }
}
