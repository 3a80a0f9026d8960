//! Shared fixtures for campus-axum integration tests.
//!
//! Factories write through the repositories directly, so records they
//! create skip service-level validation and limits.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use campus_axum::bootstrap::{AxumContext, CorsConfig};
use campus_axum::routes::create_router;
use campus_core::{
    Course, CourseFilter, CourseLimits, CourseRepository, NewCourse, NewStudent, Repos, Student,
    StudentRepository,
};
use campus_db::{CoreFactory, TestDb};

pub const BASE_PATH: &str = "/api/v1";

/// A router over a fresh in-memory database plus direct repository access.
pub struct TestApp {
    router: Router,
    repos: Repos,
    _db: TestDb,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_limits(CourseLimits::unlimited()).await
    }

    pub async fn with_limits(limits: CourseLimits) -> Self {
        let db = TestDb::new().await.expect("in-memory database");
        let core = Arc::new(CoreFactory::build_app_core(db.pool().clone(), limits));
        let router = create_router(AxumContext::new(core), &CorsConfig::AllowAll);
        let repos = CoreFactory::build_repos(db.pool().clone());

        Self {
            router,
            repos,
            _db: db,
        }
    }

    /// Send a request and return status plus parsed JSON body (`Null` when empty).
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Create `quantity` students with random names.
    pub async fn student_factory(&self, quantity: usize) -> Vec<Student> {
        let mut students = Vec::with_capacity(quantity);
        for _ in 0..quantity {
            let student = self
                .repos
                .students
                .insert(&NewStudent::new(random_name("student")))
                .await
                .unwrap();
            students.push(student);
        }
        students
    }

    /// Create a course linked to `students`; a random name when `name` is `None`.
    pub async fn course_factory(&self, name: Option<&str>, students: &[Student]) -> Course {
        let name = name.map_or_else(|| random_name("course"), str::to_string);
        let ids = students.iter().map(|s| s.id).collect();
        self.repos
            .courses
            .insert(&NewCourse::new(name, ids))
            .await
            .unwrap()
    }

    pub async fn course_count(&self) -> u64 {
        self.repos.courses.count().await.unwrap()
    }

    pub async fn all_courses(&self) -> Vec<Course> {
        self.repos.courses.list(&CourseFilter::default()).await.unwrap()
    }
}

pub fn random_name(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// Every `step`-th element of `items`, a deterministic stand-in for a random sample.
pub fn sample<T: Clone>(items: &[T], step: usize) -> Vec<T> {
    items.iter().step_by(step).cloned().collect()
}
