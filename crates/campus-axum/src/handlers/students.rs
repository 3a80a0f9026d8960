//! Student handlers - CRUD operations for students.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::{CreateStudentRequest, ListQuery, UpdateStudentRequest};
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;
use campus_core::{Student, StudentFilter};

/// List students, optionally filtered by exact `id` and/or `name`.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<Vec<Student>>, HttpError> {
    let (id, name) = query.criteria()?;
    let filter = StudentFilter { id, name };
    Ok(Json(state.core.students().list(&filter).await?))
}

/// Get a single student by ID.
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Student>, HttpError> {
    Ok(Json(state.core.students().get(id).await?))
}

/// Create a student.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateStudentRequest>,
) -> Result<(StatusCode, Json<Student>), HttpError> {
    let student = state.core.students().create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// Partially update a student.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateStudentRequest>,
) -> Result<Json<Student>, HttpError> {
    Ok(Json(state.core.students().update(id, req.into()).await?))
}

/// Replace a student.
pub async fn replace(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<CreateStudentRequest>,
) -> Result<Json<Student>, HttpError> {
    Ok(Json(state.core.students().replace(id, req.into()).await?))
}

/// Delete a student. Their course memberships are dropped; courses remain.
pub async fn remove(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    state.core.students().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
