use crate::commands::CmdResult;
use crate::error::Result;
use crate::filters::{sort_books, SortField};
use crate::store::BookStore;

pub fn run<S: BookStore + ?Sized>(
    store: &S,
    by: SortField,
    secondary: Option<SortField>,
    reverse: bool,
) -> Result<CmdResult> {
    let books = store.load()?;
    Ok(CmdResult::default().with_books(sort_books(&books, by, secondary, reverse)))
}
