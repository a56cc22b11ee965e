//! In-memory budget map keyed by calendar month.

use std::collections::BTreeMap;

use expense_tracker_shared::YearMonth;
use rust_decimal::Decimal;

use super::error::BudgetValidationError;
use crate::MAX_AMOUNT;
use super::types::Budget;

/// Budgets keyed by `(year, month)`; the last write for a month wins.
#[derive(Debug, Default, Clone)]
pub struct BudgetStore {
    budgets: BTreeMap<YearMonth, Decimal>,
}

impl BudgetStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the budget for a month, replacing any earlier value.
    ///
    /// No range check is applied to `month`.
    pub fn set_budget(&mut self, year: i32, month: u32, amount: Decimal) {
        self.budgets.insert(YearMonth::new(year, month), amount);
    }

    /// Budget for a month, or `None` if it was never set.
    #[must_use]
    pub fn get_budget(&self, year: i32, month: u32) -> Option<Decimal> {
        self.get(YearMonth::new(year, month))
    }

    /// Budget for a month key.
    #[must_use]
    pub fn get(&self, period: YearMonth) -> Option<Decimal> {
        self.budgets.get(&period).copied()
    }

    /// All budgets in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = Budget> + '_ {
        self.budgets.iter().map(|(period, amount)| Budget {
            year: period.year,
            month: period.month,
            amount: *amount,
        })
    }

    /// Number of months with a budget.
    #[must_use]
    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    /// Returns true if no budget has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }
}

/// Checks a submitted budget amount.
///
/// # Errors
///
/// Returns `BudgetValidationError::NonPositiveAmount` if the amount is zero or
/// negative, `BudgetValidationError::AmountTooLarge` above [`MAX_AMOUNT`].
pub fn validate_budget_amount(amount: Decimal) -> Result<(), BudgetValidationError> {
    if amount <= Decimal::ZERO {
        return Err(BudgetValidationError::NonPositiveAmount);
    }
    if amount > MAX_AMOUNT {
        return Err(BudgetValidationError::AmountTooLarge);
    }
    Ok(())
}
