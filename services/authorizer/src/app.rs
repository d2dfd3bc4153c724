//! Authorizer HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
use crate::api;
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub service_name: String,
    pub api_version: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            service_name: "textura-authorizer".to_string(),
            api_version: "v1".to_string(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            )
        });

    Router::new()
        .route("/v1/system/info", get(api::system::system_info))
        .route("/v1/system/health", get(api::system::system_health))
        .route("/v1/permissions", get(api::catalog::list_permissions))
        .route(
            "/v1/permissions/:permission",
            get(api::catalog::permission_entry),
        )
        .route(
            "/v1/roles/:role/permissions",
            get(api::catalog::role_permissions),
        )
        .route(
            "/v1/departments/:department/permissions",
            get(api::catalog::department_permissions),
        )
        .route("/v1/authz/effective", post(api::decisions::effective))
        .route("/v1/authz/check", post(api::decisions::check))
        .route("/v1/authz/route", post(api::decisions::route))
        .layer(trace_layer)
        .with_state(state)
}
