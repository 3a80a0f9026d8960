//! Core services - the application's business logic layer.
//!
//! Services are pure orchestrators between the repository ports and the
//! domain validation rules. They don't know about concrete implementations.

mod app_core;
mod course_service;
mod student_service;

#[cfg(test)]
mod test_support;

pub use app_core::AppCore;
pub use course_service::CourseService;
pub use student_service::StudentService;
