//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use campus_core::paths::database_path;
use campus_core::{AppCore, CourseLimits};
use campus_db::{CoreFactory, setup_database};

/// Default port for the HTTP server.
pub const DEFAULT_PORT: u16 = 8000;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: IpAddr,
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Limits enforced by the course service.
    pub limits: CourseLimits,
}

impl ServerConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(database_path()?))
    }

    /// Create config for an explicit database file.
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            database_path: database_path.into(),
            cors: CorsConfig::default(),
            limits: CourseLimits::unlimited(),
        }
    }

    /// Set the port to listen on.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the interface to bind.
    #[must_use]
    pub const fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Set the course limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: CourseLimits) -> Self {
        self.limits = limits;
        self
    }
}

/// Application context for the Axum adapter.
///
/// This struct holds all initialized services for the web server.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    /// Wrap an already composed `AppCore`.
    pub const fn new(core: Arc<AppCore>) -> Self {
        Self { core }
    }
}

/// Bootstrap the Axum server with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "campus.paths",
        database_path = %config.database_path.display(),
        max_students_per_course = ?config.limits.max_students_per_course,
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    let core = Arc::new(CoreFactory::build_app_core(pool, config.limits));

    Ok(AxumContext::new(core))
}

/// Start the web server and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = std::net::SocketAddr::new(config.host, config.port);
    let listener = TcpListener::bind(addr).await?;

    info!(
        "campus API listening on http://{}{}",
        listener.local_addr()?,
        crate::routes::API_PREFIX
    );

    axum::serve(listener, app).await?;
    Ok(())
}
