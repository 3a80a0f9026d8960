//! Course repository trait definition.
//!
//! Implementations persist the course row and its membership set together;
//! a write that fails half-way must leave no trace.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Course, CourseFilter, CourseUpdate, NewCourse};

/// Repository for course persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Returned `Course::students` is sorted and de-duplicated
/// - Membership IDs are assumed valid; `CourseService` checks them first.
///   A dangling ID that slips through surfaces as `RepositoryError::Constraint`.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// List courses matching `filter`, ordered by ID.
    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, RepositoryError>;

    /// Get a course by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the course doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Course, RepositoryError>;

    /// Total number of stored courses.
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Insert a course together with its memberships.
    async fn insert(&self, course: &NewCourse) -> Result<Course, RepositoryError>;

    /// Apply a partial update.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the course doesn't exist.
    async fn update(&self, id: i64, update: &CourseUpdate) -> Result<Course, RepositoryError>;

    /// Delete a course and its memberships.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the course doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
