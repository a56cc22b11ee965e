//! Append-only in-memory expense list.

use rust_decimal::Decimal;

use super::types::Expense;

/// Holds every recorded expense in insertion order.
///
/// The store performs no validation; callers pass already-validated
/// expenses (see [`super::validate_expense`]).
#[derive(Debug, Default, Clone)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an expense.
    pub fn add(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// All expenses in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Sum of every stored amount; zero when empty.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Number of stored expenses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
