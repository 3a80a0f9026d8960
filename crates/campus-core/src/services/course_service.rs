//! Course service - validation and orchestration for course operations.
//!
//! Membership IDs are normalized (sorted, de-duplicated) and checked against
//! the student repository before anything is written.

use std::sync::Arc;

use crate::domain::{Course, CourseFilter, CourseUpdate, NewCourse, normalize_student_ids};
use crate::limits::CourseLimits;
use crate::ports::{CoreError, CourseRepository, StudentRepository};
use crate::validation::validate_name;

/// Service for course operations.
pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
    students: Arc<dyn StudentRepository>,
    limits: CourseLimits,
}

impl CourseService {
    /// Create a new course service.
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        students: Arc<dyn StudentRepository>,
        limits: CourseLimits,
    ) -> Self {
        Self {
            courses,
            students,
            limits,
        }
    }

    /// Limits this service enforces.
    pub const fn limits(&self) -> CourseLimits {
        self.limits
    }

    /// List courses matching `filter`.
    pub async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, CoreError> {
        self.courses.list(filter).await.map_err(CoreError::from)
    }

    /// Get a course by ID.
    pub async fn get(&self, id: i64) -> Result<Course, CoreError> {
        self.courses.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Total number of courses.
    pub async fn count(&self) -> Result<u64, CoreError> {
        self.courses.count().await.map_err(CoreError::from)
    }

    /// Create a course with its initial memberships.
    pub async fn create(&self, course: NewCourse) -> Result<Course, CoreError> {
        validate_name("name", &course.name)?;
        let students = self.checked_members(&course.students).await?;

        let created = self
            .courses
            .insert(&NewCourse {
                name: course.name,
                students,
            })
            .await?;

        tracing::info!(
            course_id = created.id,
            student_count = created.students.len(),
            "Created course"
        );
        Ok(created)
    }

    /// Apply a partial update. Supplied `students` replace the membership set.
    ///
    /// Unknown IDs report `NotFound` before the payload is validated. An empty
    /// update returns the course unchanged.
    pub async fn update(&self, id: i64, update: CourseUpdate) -> Result<Course, CoreError> {
        let current = self.get(id).await?;
        if update.is_empty() {
            return Ok(current);
        }

        if let Some(name) = update.name.as_deref() {
            validate_name("name", name)?;
        }

        let students = match update.students.as_deref() {
            Some(ids) => Some(self.checked_members(ids).await?),
            None => None,
        };

        let updated = self
            .courses
            .update(
                id,
                &CourseUpdate {
                    name: update.name,
                    students,
                },
            )
            .await?;

        tracing::debug!(
            course_id = id,
            student_count = updated.students.len(),
            "Updated course"
        );
        Ok(updated)
    }

    /// Full update: name and membership set are both replaced.
    pub async fn replace(&self, id: i64, course: NewCourse) -> Result<Course, CoreError> {
        self.update(
            id,
            CourseUpdate {
                name: Some(course.name),
                students: Some(course.students),
            },
        )
        .await
    }

    /// Delete a course and its memberships.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.courses.delete(id).await?;
        tracing::info!(course_id = id, "Deleted course");
        Ok(())
    }

    /// Normalize `ids`, enforce the enrolment cap and reject unknown students.
    async fn checked_members(&self, ids: &[i64]) -> Result<Vec<i64>, CoreError> {
        let ids = normalize_student_ids(ids);

        if let Some(max) = self.limits.max_students_per_course {
            if ids.len() > max {
                return Err(CoreError::Validation(format!(
                    "students: A course cannot have more than {max} students (got {}).",
                    ids.len()
                )));
            }
        }

        let missing = self.students.find_missing(&ids).await?;
        if let Some(first) = missing.first() {
            return Err(CoreError::Validation(format!(
                "students: Invalid pk \"{first}\" - object does not exist."
            )));
        }

        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewStudent;
    use crate::ports::RepositoryError;
    use crate::services::test_support::InMemoryStore;

    async fn setup(limits: CourseLimits, student_count: usize) -> (CourseService, Vec<i64>) {
        let store = InMemoryStore::shared();
        let mut ids = Vec::with_capacity(student_count);
        for i in 0..student_count {
            let student = store
                .insert_student(&NewStudent::new(format!("student-{i}")))
                .await;
            ids.push(student.id);
        }
        (CourseService::new(store.clone(), store, limits), ids)
    }

    #[tokio::test]
    async fn test_create_normalizes_memberships() {
        let (service, ids) = setup(CourseLimits::unlimited(), 3).await;

        let course = service
            .create(NewCourse::new("Python", vec![ids[2], ids[0], ids[2]]))
            .await
            .unwrap();

        assert_eq!(course.name, "Python");
        assert_eq!(course.students, vec![ids[0], ids[2]]);
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_student() {
        let (service, ids) = setup(CourseLimits::unlimited(), 1).await;

        let err = service
            .create(NewCourse::new("Python", vec![ids[0], 999]))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(ref msg) if msg.contains("999")));
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_enforces_max_students() {
        let (service, ids) = setup(CourseLimits::unlimited().with_max_students(2), 3).await;

        let err = service
            .create(NewCourse::new("Python", ids.clone()))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let ok = service.create(NewCourse::new("Python", ids[..2].to_vec())).await;
        assert!(ok.is_ok());
    }

    #[tokio::test]
    async fn test_partial_update_keeps_students() {
        let (service, ids) = setup(CourseLimits::unlimited(), 10).await;
        let course = service.create(NewCourse::new("Php", ids.clone())).await.unwrap();

        let updated = service
            .update(
                course.id,
                CourseUpdate {
                    name: Some("Php + Laravel".to_string()),
                    students: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Php + Laravel");
        assert_eq!(updated.students, ids);
    }

    #[tokio::test]
    async fn test_update_replaces_students() {
        let (service, ids) = setup(CourseLimits::unlimited(), 4).await;
        let course = service.create(NewCourse::new("Go", ids.clone())).await.unwrap();

        let updated = service
            .update(
                course.id,
                CourseUpdate {
                    name: None,
                    students: Some(vec![ids[3]]),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Go");
        assert_eq!(updated.students, vec![ids[3]]);
    }

    #[tokio::test]
    async fn test_update_missing_course_is_not_found() {
        let (service, _) = setup(CourseLimits::unlimited(), 0).await;

        let err = service
            .update(
                7,
                CourseUpdate {
                    name: Some("Rust".to_string()),
                    students: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_course_wins_over_invalid_payload() {
        let (service, _) = setup(CourseLimits::unlimited(), 0).await;

        let err = service
            .update(
                999,
                CourseUpdate {
                    name: None,
                    students: Some(vec![123]),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::NotFound(_))
        ));

        let err = service
            .replace(999, NewCourse::new("  ", Vec::new()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_replace_without_students_clears_memberships() {
        let (service, ids) = setup(CourseLimits::unlimited(), 2).await;
        let course = service.create(NewCourse::new("C", ids)).await.unwrap();

        let replaced = service
            .replace(course.id, NewCourse::new("C++", vec![]))
            .await
            .unwrap();

        assert_eq!(replaced.name, "C++");
        assert!(replaced.students.is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_course() {
        let (service, _) = setup(CourseLimits::unlimited(), 0).await;
        let course = service.create(NewCourse::new("Java", vec![])).await.unwrap();

        service.delete(course.id).await.unwrap();

        assert_eq!(service.count().await.unwrap(), 0);
        assert!(service.get(course.id).await.is_err());
    }
}
