use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, BookDraft};
use crate::store::{AddOutcome, BookStore};

pub fn run<S: BookStore + ?Sized>(store: &mut S, draft: BookDraft) -> Result<CmdResult> {
    let book = Book::create(draft);
    match store.add(book.clone())? {
        AddOutcome::Added => Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Added: {} ({}), id={}",
                book.title, book.author, book.id
            )))
            .with_books(vec![book])),
        AddOutcome::Duplicate(existing) => {
            let year = existing
                .year
                .map(|y| format!(", {}", y))
                .unwrap_or_default();
            Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
                "Skipped: already in the library — {} ({}{}), id={}",
                existing.title, existing.author, year, existing.id
            ))))
        }
    }
}
