//! Student service - validation and orchestration for student operations.

use std::sync::Arc;

use crate::domain::{NewStudent, Student, StudentFilter, StudentUpdate};
use crate::ports::{CoreError, StudentRepository};
use crate::validation::validate_name;

/// Service for student operations.
pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

impl StudentService {
    /// Create a new student service.
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    /// List students matching `filter`.
    pub async fn list(&self, filter: &StudentFilter) -> Result<Vec<Student>, CoreError> {
        self.repo.list(filter).await.map_err(CoreError::from)
    }

    /// Get a student by ID.
    pub async fn get(&self, id: i64) -> Result<Student, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Create a student after validating its name.
    pub async fn create(&self, student: NewStudent) -> Result<Student, CoreError> {
        validate_name("name", &student.name)?;
        let created = self.repo.insert(&student).await?;
        tracing::info!(student_id = created.id, "Created student");
        Ok(created)
    }

    /// Apply a partial update.
    ///
    /// Unknown IDs report `NotFound` before the payload is validated. An empty
    /// update returns the student unchanged.
    pub async fn update(&self, id: i64, update: StudentUpdate) -> Result<Student, CoreError> {
        let current = self.get(id).await?;
        let Some(name) = update.name.as_deref() else {
            return Ok(current);
        };
        validate_name("name", name)?;

        let updated = self.repo.update(id, &update).await?;
        tracing::debug!(student_id = id, "Updated student");
        Ok(updated)
    }

    /// Full update: every field is replaced.
    pub async fn replace(&self, id: i64, student: NewStudent) -> Result<Student, CoreError> {
        self.update(
            id,
            StudentUpdate {
                name: Some(student.name),
            },
        )
        .await
    }

    /// Delete a student. Courses keep existing; only memberships are dropped.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete(id).await?;
        tracing::info!(student_id = id, "Deleted student");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RepositoryError;
    use crate::services::test_support::InMemoryStore;

    fn service() -> StudentService {
        let store = InMemoryStore::shared();
        StudentService::new(store)
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = service();

        let created = service.create(NewStudent::new("Alex")).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Alex");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let service = service();

        let err = service.create(NewStudent::new("  ")).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(service.list(&StudentFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_update_on_missing_student_is_not_found() {
        let service = service();

        let err = service.update(42, StudentUpdate::default()).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_blank_name_on_missing_student_is_not_found() {
        let service = service();

        let err = service.replace(42, NewStudent::new("")).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_replace_changes_name() {
        let service = service();
        let created = service.create(NewStudent::new("Alex")).await.unwrap();

        let replaced = service
            .replace(created.id, NewStudent::new("Alexandra"))
            .await
            .unwrap();

        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.name, "Alexandra");
    }

    #[tokio::test]
    async fn test_list_filters_by_name() {
        let service = service();
        service.create(NewStudent::new("Alex")).await.unwrap();
        service.create(NewStudent::new("Maria")).await.unwrap();

        let filter = StudentFilter {
            id: None,
            name: Some("Maria".to_string()),
        };
        let found = service.list(&filter).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Maria");
    }
}
