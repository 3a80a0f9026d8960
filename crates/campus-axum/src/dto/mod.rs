//! Request DTOs for the HTTP API.
//!
//! Responses serialize the domain types directly; requests go through these
//! types so that the wire format can evolve without touching `campus-core`.

mod courses;
mod students;

pub use courses::{CreateCourseRequest, UpdateCourseRequest};
pub use students::{CreateStudentRequest, UpdateStudentRequest};

use serde::{Deserialize, Deserializer};

use crate::error::HttpError;

/// A PATCH field that may be omitted but not set to `null`.
///
/// Used with `#[serde(default)]`, so an absent field stays `None`.
fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// `?id=&name=` listing filters, shared by both resources.
///
/// Values arrive as raw strings: an empty value means "no filter" and a
/// non-numeric `id` is a 400 rather than a silent mismatch.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl ListQuery {
    /// Parsed `(id, name)` criteria.
    pub fn criteria(self) -> Result<(Option<i64>, Option<String>), HttpError> {
        let id = match self.id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| HttpError::BadRequest(format!("id: Enter a number (got '{raw}').")))?,
            ),
        };
        let name = self.name.filter(|name| !name.is_empty());
        Ok((id, name))
    }
}
