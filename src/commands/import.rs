use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::csv_io::import_csv;
use crate::error::Result;
use crate::store::BookStore;

pub fn run(store: &mut dyn BookStore, path: &Path) -> Result<CmdResult> {
    let count = import_csv(store, path)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Imported or updated {} records (duplicates skipped)",
        count
    ))))
}
