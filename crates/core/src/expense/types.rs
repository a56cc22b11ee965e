//! Expense data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// A recorded expense.
///
/// Expenses are immutable once stored; the category is never blank and the
/// amount is always positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    /// Day the money was spent.
    pub date: NaiveDate,
    /// Category name, trimmed.
    pub category: String,
    /// Free-form description, trimmed; may be empty.
    pub description: String,
    /// Amount spent.
    pub amount: Decimal,
}

/// Input for recording a new expense, exactly as submitted.
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// Day the money was spent.
    pub date: NaiveDate,
    /// Category name.
    pub category: String,
    /// Optional description.
    pub description: Option<String>,
    /// Amount spent.
    pub amount: Decimal,
}
