//! Student domain types.

use serde::{Deserialize, Serialize};

/// A student that exists in the system with a database ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Database ID of the student (server-generated).
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// A student to be inserted into the system (no ID yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
}

impl NewStudent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Partial update for a student. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentUpdate {
    pub name: Option<String>,
}

/// Exact-match filter for student listings.
///
/// Every `Some` field must match; an empty filter matches all students.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl StudentFilter {
    /// Whether `student` passes every populated criterion.
    pub fn matches(&self, student: &Student) -> bool {
        self.id.is_none_or(|id| id == student.id)
            && self.name.as_deref().is_none_or(|name| name == student.name)
    }
}
