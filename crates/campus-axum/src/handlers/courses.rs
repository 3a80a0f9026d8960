//! Course handlers - CRUD operations for courses.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::{CreateCourseRequest, ListQuery, UpdateCourseRequest};
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;
use campus_core::{Course, CourseFilter};

/// List courses, optionally filtered by exact `id` and/or `name`.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<Vec<Course>>, HttpError> {
    let (id, name) = query.criteria()?;
    let filter = CourseFilter { id, name };
    Ok(Json(state.core.courses().list(&filter).await?))
}

/// Get a single course by ID.
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Course>, HttpError> {
    Ok(Json(state.core.courses().get(id).await?))
}

/// Create a course.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateCourseRequest>,
) -> Result<(StatusCode, Json<Course>), HttpError> {
    let course = state.core.courses().create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// Partially update a course.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateCourseRequest>,
) -> Result<Json<Course>, HttpError> {
    Ok(Json(state.core.courses().update(id, req.into()).await?))
}

/// Replace a course.
pub async fn replace(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<CreateCourseRequest>,
) -> Result<Json<Course>, HttpError> {
    Ok(Json(state.core.courses().replace(id, req.into()).await?))
}

/// Delete a course.
pub async fn remove(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    state.core.courses().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
