//! HTTP layer with Axum routes.
//!
//! This crate provides:
//! - The expense tracker page and its form submissions
//! - A JSON API mirroring the same operations
//! - Error-to-response mapping

pub mod error;
pub mod forms;
pub mod routes;
pub mod views;

use std::sync::Arc;

use axum::Router;
use expense_tracker_core::Tracker;
use expense_tracker_shared::config::DisplayConfig;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Expense and budget stores. Mutations hold the write lock for the whole
    /// submission; renders read one consistent snapshot.
    pub tracker: Arc<RwLock<Tracker>>,
    /// Display settings for the page.
    pub display: Arc<DisplayConfig>,
}

impl AppState {
    /// Wraps an owned tracker for sharing with handlers.
    #[must_use]
    pub fn new(tracker: Tracker, display: DisplayConfig) -> Self {
        Self {
            tracker: Arc::new(RwLock::new(tracker)),
            display: Arc::new(display),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::page::routes())
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
