//! The expense tracker: both stores behind one owned value.

use expense_tracker_shared::{AppError, AppResult, FieldError};
use rust_decimal::Decimal;

use crate::budget::{Budget, BudgetStore, validate_budget_amount};
use crate::expense::{Expense, ExpenseStore, NewExpense, validate_expense};
use crate::report::{ExpenseReport, MonthlyGroup, ReportService};

/// Owns the expense and budget stores for the life of the process.
///
/// Submissions are validated before anything is stored; a rejected
/// submission leaves both stores untouched.
#[derive(Debug, Default, Clone)]
pub struct Tracker {
    expenses: ExpenseStore,
    budgets: BudgetStore,
}

impl Tracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and records an expense.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` with one entry per failed rule.
    pub fn add_expense(&mut self, input: NewExpense) -> AppResult<Expense> {
        let expense = validate_expense(input).map_err(|errors| {
            AppError::Validation(errors.into_iter().map(FieldError::from).collect())
        })?;

        self.expenses.add(expense.clone());
        Ok(expense)
    }

    /// Validates and sets the budget for a month, replacing any earlier value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the amount is not positive.
    pub fn set_budget(&mut self, year: i32, month: u32, amount: Decimal) -> AppResult<Budget> {
        validate_budget_amount(amount).map_err(|e| AppError::Validation(vec![e.into()]))?;

        self.budgets.set_budget(year, month, amount);
        Ok(Budget {
            year,
            month,
            amount,
        })
    }

    /// The expense store.
    #[must_use]
    pub fn expenses(&self) -> &ExpenseStore {
        &self.expenses
    }

    /// The budget store.
    #[must_use]
    pub fn budgets(&self) -> &BudgetStore {
        &self.budgets
    }

    /// Monthly groups over everything recorded so far.
    #[must_use]
    pub fn monthly_groups(&self) -> Vec<MonthlyGroup> {
        ReportService::monthly_groups(self.expenses.all(), |period| self.budgets.get(period))
    }

    /// Grand total plus monthly groups.
    #[must_use]
    pub fn report(&self) -> ExpenseReport {
        ReportService::generate(self.expenses.all(), |period| self.budgets.get(period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use expense_tracker_shared::YearMonth;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn input(date: (i32, u32, u32), category: &str, description: &str, amount: Decimal) -> NewExpense {
        NewExpense {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category: category.to_string(),
            description: Some(description.to_string()),
            amount,
        }
    }

    #[test]
    fn test_add_expense_stores_trimmed_values() {
        let mut tracker = Tracker::new();
        let stored = tracker
            .add_expense(input((2025, 11, 3), "  Food  ", " lunch ", dec!(9.99)))
            .unwrap();

        assert_eq!(stored.category, "Food");
        assert_eq!(stored.description, "lunch");
        assert_eq!(tracker.expenses().all(), &[stored]);
        assert_eq!(tracker.expenses().total(), dec!(9.99));
    }

    #[rstest]
    #[case("Food", dec!(0), &["amount"])]
    #[case("Food", dec!(-3), &["amount"])]
    #[case("  ", dec!(3), &["category"])]
    #[case("", dec!(0), &["amount", "category"])]
    fn test_rejected_expense_leaves_state_unchanged(
        #[case] category: &str,
        #[case] amount: Decimal,
        #[case] fields: &[&str],
    ) {
        let mut tracker = Tracker::new();
        tracker
            .add_expense(input((2025, 11, 1), "Rent", "", dec!(800)))
            .unwrap();

        let err = tracker
            .add_expense(input((2025, 11, 2), category, "x", amount))
            .unwrap_err();

        let got: Vec<&str> = err.fields().iter().map(|f| f.field.as_str()).collect();
        assert_eq!(got, fields);
        assert_eq!(err.status_code(), 400);
        assert_eq!(tracker.expenses().len(), 1);
        assert_eq!(tracker.expenses().total(), dec!(800));
    }

    #[test]
    fn test_set_budget_overwrites() {
        let mut tracker = Tracker::new();
        tracker.set_budget(2025, 11, dec!(100)).unwrap();
        let budget = tracker.set_budget(2025, 11, dec!(250)).unwrap();

        assert_eq!(budget.amount, dec!(250));
        assert_eq!(tracker.budgets().get_budget(2025, 11), Some(dec!(250)));
    }

    #[test]
    fn test_rejected_budget_keeps_previous_value() {
        let mut tracker = Tracker::new();
        tracker.set_budget(2025, 11, dec!(100)).unwrap();

        let err = tracker.set_budget(2025, 11, dec!(0)).unwrap_err();

        assert_eq!(err.fields()[0].field, "budget");
        assert_eq!(err.fields()[0].message, "Budget must be positive.");
        assert_eq!(tracker.budgets().get_budget(2025, 11), Some(dec!(100)));
    }

    #[test]
    fn test_report_uses_stored_budgets() {
        let mut tracker = Tracker::new();
        tracker.add_expense(input((2025, 11, 1), "Food", "", dec!(10))).unwrap();
        tracker.add_expense(input((2025, 11, 15), "Food", "", dec!(5))).unwrap();
        tracker.add_expense(input((2025, 12, 1), "Rent", "", dec!(800))).unwrap();
        tracker.set_budget(2025, 11, dec!(20)).unwrap();

        let report = tracker.report();

        assert_eq!(report.total, dec!(815));
        assert_eq!(report.months[0].period(), YearMonth::new(2025, 12));
        assert_eq!(report.months[0].remaining, None);
        assert_eq!(report.months[1].remaining, Some(dec!(5)));
        assert!(!report.months[1].is_over_budget);
        assert_eq!(tracker.monthly_groups(), report.months);
    }

    #[test]
    fn test_oversized_amounts_never_reach_totals() {
        let mut tracker = Tracker::new();
        for _ in 0..2 {
            let err = tracker
                .add_expense(input((2025, 11, 1), "Food", "", Decimal::MAX))
                .unwrap_err();
            assert_eq!(err.fields()[0].field, "amount");
        }
        assert!(tracker.set_budget(2025, 11, Decimal::MAX).is_err());

        tracker
            .add_expense(input((2025, 11, 1), "Food", "", crate::MAX_AMOUNT))
            .unwrap();
        tracker
            .add_expense(input((2025, 11, 2), "Food", "", crate::MAX_AMOUNT))
            .unwrap();
        tracker.set_budget(2025, 11, crate::MAX_AMOUNT).unwrap();

        let report = tracker.report();
        assert_eq!(report.total, dec!(2000000000));
        assert_eq!(report.months[0].remaining, Some(dec!(-1000000000)));
        assert!(report.months[0].is_over_budget);
    }

    #[test]
    fn test_empty_tracker_report() {
        let tracker = Tracker::new();
        let report = tracker.report();
        assert!(report.months.is_empty());
        assert_eq!(report.total, Decimal::ZERO);
    }
}
