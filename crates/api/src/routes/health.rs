//! Health check endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Number of recorded expenses.
    pub expenses: usize,
    /// Number of months with a budget.
    pub budgets: usize,
}

/// GET `/health` - Liveness plus store sizes.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let tracker = state.tracker.read().await;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        expenses: tracker.expenses().len(),
        budgets: tracker.budgets().len(),
    })
}

/// Creates the health check route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
