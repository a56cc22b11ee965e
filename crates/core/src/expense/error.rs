//! Expense validation errors.

use expense_tracker_shared::FieldError;
use thiserror::Error;

/// Reasons an expense submission is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpenseValidationError {
    /// Amount is zero or negative.
    #[error("Amount must be positive.")]
    NonPositiveAmount,

    /// Amount is above [`crate::MAX_AMOUNT`].
    #[error("Amount must not exceed 1,000,000,000.")]
    AmountTooLarge,

    /// Category is empty or whitespace only.
    #[error("Category is required.")]
    MissingCategory,
}

impl ExpenseValidationError {
    /// Name of the form field this error belongs to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount | Self::AmountTooLarge => "amount",
            Self::MissingCategory => "category",
        }
    }
}

impl From<ExpenseValidationError> for FieldError {
    fn from(err: ExpenseValidationError) -> Self {
        FieldError::new(err.field(), err.to_string())
    }
}
