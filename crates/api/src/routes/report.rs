//! Monthly report endpoint.

use axum::{Json, Router, extract::State, routing::get};
use expense_tracker_core::report::ExpenseReport;
use tracing::debug;

use crate::AppState;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/report", get(get_report))
}

/// GET `/report` - Grand total plus month/category breakdown.
async fn get_report(State(state): State<AppState>) -> Json<ExpenseReport> {
    let report = state.tracker.read().await.report();
    debug!(months = report.months.len(), "Report generated");
    Json(report)
}
