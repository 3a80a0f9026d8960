//! Web command handler.
//!
//! Translates `campus web` options into a `ServerConfig` and runs the axum
//! server until the process is stopped.

use std::path::PathBuf;

use anyhow::Result;

use campus_axum::{ServerConfig, start_server};
use campus_core::CourseLimits;

use crate::commands::WebArgs;

/// Build the server configuration for `campus web`.
pub fn server_config(args: &WebArgs, database: Option<PathBuf>) -> Result<ServerConfig> {
    let config = match database {
        Some(path) => ServerConfig::new(path),
        None => ServerConfig::with_defaults()?,
    };

    let limits = args
        .max_students_per_course
        .map_or_else(CourseLimits::unlimited, |max| {
            CourseLimits::unlimited().with_max_students(max)
        });

    let config = config
        .with_host(args.host)
        .with_port(args.port)
        .with_limits(limits);

    if args.allowed_origins.is_empty() {
        Ok(config)
    } else {
        Ok(config.with_allowed_origins(args.allowed_origins.clone()))
    }
}

/// Execute the web command.
pub async fn execute(args: &WebArgs, database: Option<PathBuf>) -> Result<()> {
    let config = server_config(args, database)?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        "Starting campus web server"
    );
    start_server(config).await
}
