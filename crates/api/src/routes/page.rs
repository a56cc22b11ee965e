//! The expense tracker page and its form submissions.
//!
//! Both submissions answer with the re-rendered page. A rejected submission
//! keeps the entered values and shows messages next to the fields; nothing
//! is stored.

use std::fmt;

use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveDate};
use expense_tracker_core::Tracker;
use expense_tracker_core::budget::Budget;
use expense_tracker_shared::{AppError, FieldError};
use tracing::{debug, error, info, warn};

use crate::{
    AppState,
    forms::{BudgetForm, ExpenseForm},
    views::{IndexPage, render_index},
};

/// Creates the page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/expenses", post(add_expense))
        .route("/budgets", post(set_budget))
}

/// Form state carried into a render.
struct PageForms {
    notice: Option<&'static str>,
    expense_form: ExpenseForm,
    expense_errors: Vec<FieldError>,
    budget_form: BudgetForm,
    budget_errors: Vec<FieldError>,
}

impl PageForms {
    fn fresh(today: NaiveDate) -> Self {
        Self {
            notice: None,
            expense_form: ExpenseForm::new(today),
            expense_errors: Vec::new(),
            budget_form: BudgetForm::new(today),
            budget_errors: Vec::new(),
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// GET `/` - Render the page.
async fn index(State(state): State<AppState>) -> Response {
    let tracker = state.tracker.read().await;
    render(&state, &tracker, &PageForms::fresh(today()))
}

/// POST `/expenses` - Add an expense from the form.
async fn add_expense(State(state): State<AppState>, Form(form): Form<ExpenseForm>) -> Response {
    let mut forms = PageForms::fresh(today());
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
            forms.notice = Some("Expense added.");
            forms.expense_form = form.reset();
        }
        Err(e) => {
            warn!(error = %e, "Expense rejected");
            forms.expense_errors = e.fields().to_vec();
            forms.expense_form = form;
        }
    }

    let tracker = tracker.downgrade();
    render(&state, &tracker, &forms)
}

/// POST `/budgets` - Set a monthly budget from the form.
async fn set_budget(State(state): State<AppState>, Form(form): Form<BudgetForm>) -> Response {
    let mut forms = PageForms::fresh(today());
    let mut tracker = state.tracker.write().await;

    let outcome = form
        .parse()
        .map_err(AppError::Validation)
        .and_then(|s| tracker.set_budget(s.year, s.month, s.amount));

    match outcome {
        Ok(budget) => {
            info!(period = %budget.period(), amount = %budget.amount, "Budget set");
            forms.notice = Some("Budget saved.");
            forms.budget_form = form.reset();
        }
        Err(e) => {
            warn!(error = %e, "Budget rejected");
            forms.budget_errors = e.fields().to_vec();
            forms.budget_form = form;
        }
    }

    let tracker = tracker.downgrade();
    render(&state, &tracker, &forms)
}

fn render(state: &AppState, tracker: &Tracker, forms: &PageForms) -> Response {
    let months = tracker.monthly_groups();
    let budgets: Vec<Budget> = tracker.budgets().iter().collect();
    debug!(months = months.len(), "Rendering page");

    let page = IndexPage {
        currency_symbol: &state.display.currency_symbol,
        notice: forms.notice,
        expense_form: &forms.expense_form,
        expense_errors: &forms.expense_errors,
        budget_form: &forms.budget_form,
        budget_errors: &forms.budget_errors,
        expenses: tracker.expenses().all(),
        total: tracker.expenses().total(),
        budgets: &budgets,
        months: &months,
    };

    page_response(render_index(&page))
}

fn page_response(rendered: Result<String, fmt::Error>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "Page render failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<!DOCTYPE html>\n<title>Expense Tracker</title>\n<h1>Something went wrong</h1>\n"),
            )
                .into_response()
        }
    }
}
