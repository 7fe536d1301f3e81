pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats;
use crate::errors::AppError;
use crate::roles::handlers as roles;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS API
        .route("/api/v1/ats/analyze", post(ats::handle_analyze))
        .route(
            "/api/v1/ats/analyze/upload",
            post(ats::handle_analyze_upload),
        )
        .route("/api/v1/ats/sections", post(ats::handle_sections))
        .route("/api/v1/ats/keywords", post(ats::handle_keywords))
        // Role mapping
        .route("/api/v1/navigation", get(roles::handle_navigation))
        .route("/api/v1/access", get(roles::handle_access))
        .fallback(not_found)
        .with_state(state)
}
