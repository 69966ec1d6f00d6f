use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::migrate::migrate_to_sqlite;
use crate::store::json::JsonStore;
use crate::store::sqlite::SqliteStore;

/// Copies the JSON catalog at `src` into the SQLite database at `dst`.
/// Deliberately ignores whichever store the session is pointed at.
pub fn run(src: &Path, dst: &Path) -> Result<CmdResult> {
    let json = JsonStore::new(src)?;
    let mut sqlite = SqliteStore::new(dst)?;
    let count = migrate_to_sqlite(&json, &mut sqlite)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Migration complete: {} records → {}",
        count,
        dst.display()
    ))))
}
