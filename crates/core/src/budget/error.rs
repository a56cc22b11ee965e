//! Budget error types.

use expense_tracker_shared::FieldError;
use thiserror::Error;

/// Reasons a budget submission is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BudgetValidationError {
    /// Budget amount is zero or negative.
    #[error("Budget must be positive.")]
    NonPositiveAmount,

    /// Budget amount is above [`crate::MAX_AMOUNT`].
    #[error("Budget must not exceed 1,000,000,000.")]
    AmountTooLarge,
}

impl BudgetValidationError {
    /// Name of the form field this error belongs to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount | Self::AmountTooLarge => "budget",
        }
    }
}

impl From<BudgetValidationError> for FieldError {
    fn from(err: BudgetValidationError) -> Self {
        FieldError::new(err.field(), err.to_string())
    }
}
