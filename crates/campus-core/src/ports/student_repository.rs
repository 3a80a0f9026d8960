//! Student repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewStudent, Student, StudentFilter, StudentUpdate};

/// Repository for student persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: validation belongs in `StudentService`
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// List students matching `filter`, ordered by ID.
    async fn list(&self, filter: &StudentFilter) -> Result<Vec<Student>, RepositoryError>;

    /// Get a student by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the student doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Student, RepositoryError>;

    /// Return the subset of `ids` that do not reference an existing student.
    async fn find_missing(&self, ids: &[i64]) -> Result<Vec<i64>, RepositoryError>;

    /// Insert a new student and return it with its assigned ID.
    async fn insert(&self, student: &NewStudent) -> Result<Student, RepositoryError>;

    /// Apply a partial update and return the stored result.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the student doesn't exist.
    async fn update(&self, id: i64, update: &StudentUpdate) -> Result<Student, RepositoryError>;

    /// Delete a student by its database ID. Course memberships go with it.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the student doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
