//! Paths command handler.
//!
//! Displays the resolved data directory and database file, which is the
//! first thing to check when the CLI and the server disagree about data.

use std::path::PathBuf;

use anyhow::Result;

use campus_core::paths::{DATA_DIR_ENV, data_root};

use crate::bootstrap::CliConfig;
use crate::error::CliError;

/// Execute the paths command.
///
/// `database` is the `--database` override, if any.
pub fn execute(database: Option<PathBuf>) -> Result<()> {
    let root = data_root().map_err(CliError::from)?;
    let config = CliConfig::resolve(database)?;

    println!("data_dir = {}", root.display());
    println!("database = {}", config.database_path.display());
    if let Ok(value) = std::env::var(DATA_DIR_ENV) {
        println!("{DATA_DIR_ENV} = {value}");
    }
    Ok(())
}
