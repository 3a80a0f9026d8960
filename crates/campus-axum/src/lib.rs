//! HTTP adapter for campus.
//!
//! Serves the course and student CRUD API under `/api/v1` with axum.
//! Handlers are thin: they extract the request, call into `AppCore` and map
//! `CoreError` onto HTTP status codes through [`HttpError`].
#![deny(unsafe_code)]

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::{API_PREFIX, create_router};
pub use state::AppState;
