//! Student request bodies.

use campus_core::{NewStudent, StudentUpdate};
use serde::Deserialize;

/// Body of `POST /students/` and `PUT /students/{id}/`.
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(req: CreateStudentRequest) -> Self {
        Self::new(req.name)
    }
}

/// Body of `PATCH /students/{id}/`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStudentRequest {
    #[serde(default, deserialize_with = "super::non_null")]
    pub name: Option<String>,
}

impl From<UpdateStudentRequest> for StudentUpdate {
    fn from(req: UpdateStudentRequest) -> Self {
        Self { name: req.name }
    }
}
