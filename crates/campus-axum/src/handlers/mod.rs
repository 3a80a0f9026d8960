//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for one resource.
//! Handlers are thin wrappers that delegate to `AppCore`.

pub mod courses;
pub mod students;
