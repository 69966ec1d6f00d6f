use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::csv_io::export_csv;
use crate::error::Result;
use crate::store::BookStore;

pub fn run(store: &dyn BookStore, path: &Path) -> Result<CmdResult> {
    let count = export_csv(store, path)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Exported {} records to {}",
        count,
        path.display()
    ))))
}
