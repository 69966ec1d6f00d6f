//! Storage location and backend selection.
//!
//! The path the catalog lives at is resolved once, explicitly, and carried
//! in a [`StoreConfig`]; no ambient globals. Precedence:
//!
//! 1. an explicit path (the `--db` flag),
//! 2. the `TOME_DB` environment variable,
//! 3. `library.json` under the platform data directory.
//!
//! The backend is chosen from the path's extension: `.db`, `.sqlite` and
//! `.sqlite3` select SQLite, anything else the JSON document store.

use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment override for the storage path.
pub const DB_ENV_VAR: &str = "TOME_DB";

const DEFAULT_DB_FILENAME: &str = "library.json";
const SQLITE_EXTENSIONS: [&str; 3] = ["db", "sqlite", "sqlite3"];

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    /// Resolves the storage path with flag > environment > default
    /// precedence.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::resolve_from(explicit, std::env::var_os(DB_ENV_VAR))
    }

    fn resolve_from(explicit: Option<PathBuf>, env_override: Option<OsString>) -> Self {
        let path = explicit
            .or_else(|| env_override.map(PathBuf::from))
            .unwrap_or_else(Self::default_path);
        Self { path }
    }

    fn default_path() -> PathBuf {
        let data_dir = ProjectDirs::from("com", "tome", "tome")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        data_dir.join(DEFAULT_DB_FILENAME)
    }

    /// True when the path's extension selects the SQLite backend.
    pub fn is_sqlite(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_lowercase();
                SQLITE_EXTENSIONS.iter().any(|s| *s == ext)
            })
            .unwrap_or(false)
    }
}
