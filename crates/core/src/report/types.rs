//! Report data types.

use expense_tracker_shared::YearMonth;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::expense::Expense;

/// Expenses sharing a month and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    /// Category name.
    pub category: String,
    /// Sum of the group's amounts.
    pub total: Decimal,
    /// Expenses ordered by date, then description.
    pub expenses: Vec<Expense>,
}

/// All expenses in one calendar month plus its budget status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyGroup {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1 = January.
    pub month: u32,
    /// Sum of the category totals.
    pub total: Decimal,
    /// Categories ordered by name.
    pub categories: Vec<CategoryGroup>,
    /// Budget set for the month, if any.
    pub budget: Option<Decimal>,
    /// `budget - total`; absent when no budget is set.
    pub remaining: Option<Decimal>,
    /// True only when `remaining` is present and negative.
    pub is_over_budget: bool,
}

impl MonthlyGroup {
    /// Month key of this group.
    #[must_use]
    pub const fn period(&self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }
}

/// Full report: the grand total plus the monthly breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseReport {
    /// Sum of every expense.
    pub total: Decimal,
    /// Monthly groups, newest month first.
    pub months: Vec<MonthlyGroup>,
}
