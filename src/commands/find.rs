use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filters::{search, sort_books, SearchCriteria, SortField};
use crate::store::BookStore;

/// Searches the collection: filtered first, then sorted.
pub fn run<S: BookStore + ?Sized>(
    store: &S,
    criteria: &SearchCriteria,
    by: SortField,
    secondary: Option<SortField>,
    reverse: bool,
) -> Result<CmdResult> {
    let books = store.load()?;
    let found = search(&books, criteria);
    let found = sort_books(&found, by, secondary, reverse);
    if found.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Nothing found.")));
    }
    Ok(CmdResult::default().with_books(found))
}
