//! Monthly budgets.

pub mod error;
pub mod store;
pub mod types;

pub use error::BudgetValidationError;
pub use store::{BudgetStore, validate_budget_amount};
pub use types::Budget;
