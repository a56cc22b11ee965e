//! Expense JSON endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use expense_tracker_core::expense::Expense;
use expense_tracker_shared::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    AppState,
    error::ApiError,
    forms::{ExpenseForm, json_field_text},
};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/expenses", get(list_expenses).post(create_expense))
}

/// Request body for recording an expense.
///
/// Fields are read loosely, like the page form: a missing field is blank and
/// the amount may be a string or a number.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateExpenseRequest {
    /// Date in `YYYY-MM-DD` form.
    pub date: Value,
    /// Category name.
    pub category: Value,
    /// Optional description.
    pub description: Value,
    /// Decimal amount.
    pub amount: Value,
}

impl From<CreateExpenseRequest> for ExpenseForm {
    fn from(request: CreateExpenseRequest) -> Self {
        Self {
            date: json_field_text(&request.date),
            category: json_field_text(&request.category),
            description: json_field_text(&request.description),
            amount: json_field_text(&request.amount),
        }
    }
}

/// Response for the expense list.
#[derive(Debug, Serialize)]
pub struct ExpenseListResponse {
    /// Expenses in insertion order.
    pub expenses: Vec<Expense>,
    /// Sum of all amounts.
    pub total: Decimal,
}

/// GET `/expenses` - All expenses and the grand total.
async fn list_expenses(State(state): State<AppState>) -> Json<ExpenseListResponse> {
    let tracker = state.tracker.read().await;

    Json(ExpenseListResponse {
        expenses: tracker.expenses().all().to_vec(),
        total: tracker.expenses().total(),
    })
}

/// POST `/expenses` - Record an expense.
async fn create_expense(
    State(state): State<AppState>,
    payload: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let form = ExpenseForm::from(payload);
    let mut tracker = state.tracker.write().await;

    let outcome = form
        .parse()
        .map_err(AppError::Validation)
        .and_then(|input| tracker.add_expense(input));

    match outcome {
        Ok(expense) => {
            info!(
                date = %expense.date,
                category = %expense.category,
                amount = %expense.amount,
                "Expense added"
            );
            Ok((StatusCode::CREATED, Json(expense)))
        }
        Err(e) => {
            warn!(error = %e, "Expense rejected");
            Err(e.into())
        }
    }
}
