//! Course request bodies.

use campus_core::{CourseUpdate, NewCourse};
use serde::Deserialize;

/// Body of `POST /courses/` and `PUT /courses/{id}/`.
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    #[serde(default)]
    pub students: Vec<i64>,
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(req: CreateCourseRequest) -> Self {
        Self::new(req.name, req.students)
    }
}

/// Body of `PATCH /courses/{id}/`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCourseRequest {
    #[serde(default, deserialize_with = "super::non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::non_null")]
    pub students: Option<Vec<i64>>,
}

impl From<UpdateCourseRequest> for CourseUpdate {
    fn from(req: UpdateCourseRequest) -> Self {
        Self {
            name: req.name,
            students: req.students,
        }
    }
}
