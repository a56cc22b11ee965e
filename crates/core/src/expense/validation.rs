//! Submission rules for new expenses.

use rust_decimal::Decimal;

use super::error::ExpenseValidationError;
use crate::MAX_AMOUNT;
use super::types::{Expense, NewExpense};

/// Validates a submission and normalizes it into a storable expense.
///
/// All failed rules are reported together, amount first. On success the
/// category and description are trimmed and a missing description becomes
/// an empty string.
///
/// # Errors
///
/// Returns every rule the input violates.
pub fn validate_expense(input: NewExpense) -> Result<Expense, Vec<ExpenseValidationError>> {
    let mut errors = Vec::new();

    if input.amount <= Decimal::ZERO {
        errors.push(ExpenseValidationError::NonPositiveAmount);
    } else if input.amount > MAX_AMOUNT {
        errors.push(ExpenseValidationError::AmountTooLarge);
    }

    let category = input.category.trim();
    if category.is_empty() {
        errors.push(ExpenseValidationError::MissingCategory);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Expense {
        date: input.date,
        category: category.to_string(),
        description: input
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        amount: input.amount,
    })
}
