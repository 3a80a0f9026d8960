//! Core domain for the campus course registry.
//!
//! Contains the Student and Course types, the repository ports that storage
//! adapters implement, and the services that validate and orchestrate
//! operations. Nothing in this crate knows about SQL or HTTP.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod limits;
pub mod paths;
pub mod ports;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    Course, CourseFilter, CourseUpdate, NewCourse, NewStudent, Student, StudentFilter,
    StudentUpdate, normalize_student_ids,
};
pub use limits::{CourseLimits, MAX_NAME_LEN};
pub use paths::{PathError, data_root, database_path};
pub use ports::{CoreError, CourseRepository, Repos, RepositoryError, StudentRepository};
pub use services::{AppCore, CourseService, StudentService};
