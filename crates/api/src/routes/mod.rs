//! Route definitions.

use axum::Router;

use crate::AppState;

pub mod budgets;
pub mod expenses;
pub mod health;
pub mod page;
pub mod report;

/// Creates the JSON API router (mounted under `/api/v1`).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(expenses::routes())
        .merge(budgets::routes())
        .merge(report::routes())
}
