//! Route definitions and router construction.
//!
//! Resource routes answer both with and without a trailing slash
//! (`/courses` and `/courses/`).

use axum::Router;
use axum::routing::{MethodRouter, get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Mount point of the versioned API.
pub const API_PREFIX: &str = "/api/v1";

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Register `method_router` under `path` and `path/`.
fn route_with_slash(
    router: Router<AppState>,
    path: &str,
    method_router: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, method_router.clone())
        .route(&format!("{path}/"), method_router)
}

/// Build all API routes without the `/api/v1` prefix.
///
/// The caller must apply `.with_state()` before nesting.
pub(crate) fn api_routes() -> Router<AppState> {
    let router = Router::new();

    // Courses API
    let router = route_with_slash(
        router,
        "/courses",
        get(handlers::courses::list).post(handlers::courses::create),
    );
    let router = route_with_slash(
        router,
        "/courses/{id}",
        get(handlers::courses::get)
            .patch(handlers::courses::update)
            .put(handlers::courses::replace)
            .delete(handlers::courses::remove),
    );

    // Students API
    let router = route_with_slash(
        router,
        "/students",
        get(handlers::students::list).post(handlers::students::create),
    );
    route_with_slash(
        router,
        "/students/{id}",
        get(handlers::students::get)
            .patch(handlers::students::update)
            .put(handlers::students::replace)
            .delete(handlers::students::remove),
    )
}

/// Create the main Axum router with all API routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .nest(API_PREFIX, api_routes().with_state(state).layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
