//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `student` - Student types (`Student`, `NewStudent`, ...)
//! - `course` - Course types and the membership-set helper

mod course;
mod student;

pub use course::{Course, CourseFilter, CourseUpdate, NewCourse, normalize_student_ids};
pub use student::{NewStudent, Student, StudentFilter, StudentUpdate};
