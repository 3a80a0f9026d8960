//! Course domain types.
//!
//! A course owns a set of student memberships. The set is represented as a
//! sorted, de-duplicated `Vec<i64>` of student IDs so that the JSON shape is
//! stable regardless of insertion order.

use serde::{Deserialize, Serialize};

/// A course that exists in the system with a database ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Database ID of the course (server-generated).
    pub id: i64,
    /// Display name.
    pub name: String,
    /// IDs of enrolled students, ascending and unique.
    pub students: Vec<i64>,
}

/// A course to be inserted into the system (no ID yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    pub name: String,
    #[serde(default)]
    pub students: Vec<i64>,
}

impl NewCourse {
    pub fn new(name: impl Into<String>, students: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            students,
        }
    }
}

/// Partial update for a course.
///
/// `students: Some(ids)` replaces the whole membership set; `None` keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseUpdate {
    pub name: Option<String>,
    pub students: Option<Vec<i64>>,
}

impl CourseUpdate {
    /// True when the update would not change anything.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.students.is_none()
    }
}

/// Exact-match filter for course listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl CourseFilter {
    /// Whether `course` passes every populated criterion.
    pub fn matches(&self, course: &Course) -> bool {
        self.id.is_none_or(|id| id == course.id)
            && self.name.as_deref().is_none_or(|name| name == course.name)
    }
}

/// Sort and de-duplicate a list of student IDs into membership-set form.
pub fn normalize_student_ids(ids: &[i64]) -> Vec<i64> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}
