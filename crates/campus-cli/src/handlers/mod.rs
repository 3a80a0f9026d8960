//! Command handlers that delegate to `AppCore`.
//!
//! Handlers are thin wrappers: they call into `AppCore` through
//! `CliContext` and format the result for the terminal. They never touch
//! repositories or the database pool directly.

pub mod courses;
pub mod paths;
pub mod students;
pub mod web;
