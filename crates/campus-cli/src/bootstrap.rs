//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the `SQLite` pool and repositories come from
//! `campus-db`, the services from `campus-core`.
//!
//! Command handlers receive the fully-composed `AppCore` and delegate work to it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use campus_core::paths::database_path;
use campus_core::{AppCore, CourseLimits};
use campus_db::{CoreFactory, setup_database};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// Limits applied by the course service.
    pub limits: CourseLimits,
}

impl CliConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Result<Self> {
        let path = database_path().map_err(CliError::from)?;
        Ok(Self::new(path))
    }

    /// Use the explicit database file when one was given, the default otherwise.
    pub fn resolve(database: Option<PathBuf>) -> Result<Self> {
        match database {
            Some(path) => Ok(Self::new(path)),
            None => Self::with_defaults(),
        }
    }

    /// Create config for an explicit database file.
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            limits: CourseLimits::unlimited(),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    app: Arc<AppCore>,
}

impl CliContext {
    /// Access the core application facade.
    pub fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Compose the CLI context: open the database and build `AppCore`.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    tracing::debug!(
        target: "campus.paths",
        database_path = %config.database_path.display(),
        "CLI bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    let app = Arc::new(CoreFactory::build_app_core(pool, config.limits));

    Ok(CliContext { app })
}
