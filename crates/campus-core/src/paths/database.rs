//! Database path resolution.
//!
//! Provides the canonical path to the campus `SQLite` database file.

use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::{data_root, ensure_dir};

/// File name of the database inside `<data_root>/data`.
pub const DATABASE_FILE_NAME: &str = "campus.db";

/// Get the path to the campus database file.
///
/// Returns the path to `campus.db` in the `data/` subdirectory of the
/// data root. The subdirectory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_in(&data_root()?)
}

/// Same as [`database_path`] but rooted at an explicit directory.
pub fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");
    ensure_dir(&data_dir)?;
    Ok(data_dir.join(DATABASE_FILE_NAME))
}
