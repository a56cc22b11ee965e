//! Expense records, submission validation, and the in-memory expense store.

pub mod error;
pub mod store;
pub mod types;
pub mod validation;

pub use error::ExpenseValidationError;
pub use store::ExpenseStore;
pub use types::{Expense, NewExpense};
pub use validation::validate_expense;
