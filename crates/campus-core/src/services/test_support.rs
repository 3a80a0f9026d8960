//! In-memory repository doubles for service tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{
    Course, CourseFilter, CourseUpdate, NewCourse, NewStudent, Student, StudentFilter,
    StudentUpdate, normalize_student_ids,
};
use crate::ports::{CourseRepository, RepositoryError, StudentRepository};

#[derive(Default)]
struct State {
    next_id: i64,
    students: Vec<Student>,
    courses: Vec<Course>,
}

impl State {
    const fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Implements both repository ports over one mutex-guarded state so that
/// deleting a student can drop its memberships like the SQL schema does.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn insert_student(&self, student: &NewStudent) -> Student {
        StudentRepository::insert(self, student).await.unwrap()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStore {
    async fn list(&self, filter: &StudentFilter) -> Result<Vec<Student>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .students
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Student, RepositoryError> {
        let state = self.state.lock().unwrap();
        state
            .students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Student with ID {id}")))
    }

    async fn find_missing(&self, ids: &[i64]) -> Result<Vec<i64>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(ids
            .iter()
            .copied()
            .filter(|id| !state.students.iter().any(|s| s.id == *id))
            .collect())
    }

    async fn insert(&self, student: &NewStudent) -> Result<Student, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let created = Student {
            id: state.next_id(),
            name: student.name.clone(),
        };
        state.students.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, update: &StudentUpdate) -> Result<Student, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let student = state
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Student with ID {id}")))?;
        if let Some(name) = &update.name {
            student.name.clone_from(name);
        }
        Ok(student.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.students.len();
        state.students.retain(|s| s.id != id);
        if state.students.len() == before {
            return Err(RepositoryError::NotFound(format!("Student with ID {id}")));
        }
        for course in &mut state.courses {
            course.students.retain(|s| *s != id);
        }
        Ok(())
    }
}

#[async_trait]
impl CourseRepository for InMemoryStore {
    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .courses
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Course, RepositoryError> {
        let state = self.state.lock().unwrap();
        state
            .courses
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Course with ID {id}")))
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.state.lock().unwrap().courses.len() as u64)
    }

    async fn insert(&self, course: &NewCourse) -> Result<Course, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let created = Course {
            id: state.next_id(),
            name: course.name.clone(),
            students: normalize_student_ids(&course.students),
        };
        state.courses.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, update: &CourseUpdate) -> Result<Course, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let course = state
            .courses
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Course with ID {id}")))?;
        if let Some(name) = &update.name {
            course.name.clone_from(name);
        }
        if let Some(students) = &update.students {
            course.students = normalize_student_ids(students);
        }
        Ok(course.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.courses.len();
        state.courses.retain(|c| c.id != id);
        if state.courses.len() == before {
            return Err(RepositoryError::NotFound(format!("Course with ID {id}")));
        }
        Ok(())
    }
}
