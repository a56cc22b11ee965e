//! Budget JSON endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::get,
};
use expense_tracker_core::budget::Budget;
use expense_tracker_shared::{AppError, YearMonth};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    AppState,
    error::ApiError,
    forms::{json_field_text, parse_amount},
};

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(list_budgets))
        .route("/budgets/{year}/{month}", get(get_budget).put(set_budget))
}

/// Request body for setting a budget.
///
/// A missing or non-numeric amount counts as zero, as on the page form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SetBudgetRequest {
    /// Budgeted amount, as a string or a number.
    pub amount: Value,
}

/// Response for the budget list.
#[derive(Debug, Serialize)]
pub struct BudgetListResponse {
    /// Budgets in chronological order.
    pub budgets: Vec<Budget>,
}

/// GET `/budgets` - Every budget set so far.
async fn list_budgets(State(state): State<AppState>) -> Json<BudgetListResponse> {
    let tracker = state.tracker.read().await;

    Json(BudgetListResponse {
        budgets: tracker.budgets().iter().collect(),
    })
}

/// GET `/budgets/{year}/{month}` - Budget for one month.
async fn get_budget(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<Budget>, ApiError> {
    let tracker = state.tracker.read().await;

    tracker
        .budgets()
        .get_budget(year, month)
        .map(|amount| {
            Json(Budget {
                year,
                month,
                amount,
            })
        })
        .ok_or_else(|| {
            AppError::NotFound(format!("budget for {}", YearMonth::new(year, month))).into()
        })
}

/// PUT `/budgets/{year}/{month}` - Set or replace the budget for a month.
async fn set_budget(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
    payload: Result<Json<SetBudgetRequest>, JsonRejection>,
) -> Result<Json<Budget>, ApiError> {
    let Json(payload) = payload?;
    let amount = parse_amount(&json_field_text(&payload.amount));
    let mut tracker = state.tracker.write().await;

    match tracker.set_budget(year, month, amount) {
        Ok(budget) => {
            info!(period = %budget.period(), amount = %budget.amount, "Budget set");
            Ok(Json(budget))
        }
        Err(e) => {
            warn!(error = %e, year, month, "Budget rejected");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{body_json, test_state};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    fn put(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_unset_budget_is_404() {
        let app = routes().with_state(test_state());

        let response = app.oneshot(get("/budgets/2025/11")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Not found: budget for 2025-11");
    }

    #[tokio::test]
    async fn test_put_then_get_latest_value() {
        let state = test_state();

        for amount in ["100", "250.75"] {
            let response = routes()
                .with_state(state.clone())
                .oneshot(put(
                    "/budgets/2025/11",
                    &format!(r#"{{"amount":"{amount}"}}"#),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = routes()
            .with_state(state.clone())
            .oneshot(get("/budgets/2025/11"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["year"], 2025);
        assert_eq!(body["month"], 11);
        assert_eq!(body["amount"], "250.75");

        assert_eq!(
            state.tracker.read().await.budgets().get_budget(2025, 11),
            Some(dec!(250.75))
        );
    }

    #[tokio::test]
    async fn test_non_positive_budget_rejected() {
        let state = test_state();

        let response = routes()
            .with_state(state.clone())
            .oneshot(put("/budgets/2025/11", r#"{"amount":"0"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["fields"][0]["field"], "budget");
        assert_eq!(body["fields"][0]["message"], "Budget must be positive.");
        assert!(state.tracker.read().await.budgets().is_empty());
    }

    #[rstest]
    #[case(r#"{"amount":"abc"}"#)]
    #[case(r#"{}"#)]
    #[case(r#"{"amount":null}"#)]
    #[tokio::test]
    async fn test_unreadable_budget_amount_rejected(#[case] body: &str) {
        let state = test_state();

        let response = routes()
            .with_state(state.clone())
            .oneshot(put("/budgets/2025/11", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["fields"][0]["field"], "budget");
        assert_eq!(body["fields"][0]["message"], "Budget must be positive.");
        assert!(state.tracker.read().await.budgets().is_empty());
    }

    #[tokio::test]
    async fn test_numeric_budget_amount_accepted() {
        let state = test_state();

        let response = routes()
            .with_state(state.clone())
            .oneshot(put("/budgets/2025/11", r#"{"amount":300}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["amount"], "300");
        assert_eq!(
            state.tracker.read().await.budgets().get_budget(2025, 11),
            Some(dec!(300))
        );
    }

    #[tokio::test]
    async fn test_budget_over_cap_rejected() {
        let state = test_state();

        let response = routes()
            .with_state(state.clone())
            .oneshot(put(
                "/budgets/2025/11",
                r#"{"amount":"1000000000.01"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body["fields"][0]["message"],
            "Budget must not exceed 1,000,000,000."
        );
        assert!(state.tracker.read().await.budgets().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_budget_body_rejected() {
        let response = routes()
            .with_state(test_state())
            .oneshot(put("/budgets/2025/11", "amount=5"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["fields"][0]["field"], "body");
    }

    #[tokio::test]
    async fn test_list_budgets_chronological() {
        let state = test_state();
        for uri in ["/budgets/2025/12", "/budgets/2024/3"] {
            routes()
                .with_state(state.clone())
                .oneshot(put(uri, r#"{"amount":"10"}"#))
                .await
                .unwrap();
        }

        let response = routes()
            .with_state(state)
            .oneshot(get("/budgets"))
            .await
            .unwrap();
        let body = body_json(response).await;

        assert_eq!(body["budgets"][0]["year"], 2024);
        assert_eq!(body["budgets"][1]["year"], 2025);
    }
}
