use crate::commands::helpers::{fetch_book, Lookup};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore + ?Sized>(store: &S, reference: &str) -> Result<CmdResult> {
    match fetch_book(store, reference)? {
        Lookup::Found(book) => Ok(CmdResult::default().with_books(vec![book])),
        Lookup::Failed(result) => Ok(result),
    }
}
