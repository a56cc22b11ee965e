//! Core business logic for the expense tracker.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `expense` - Expense records, validation, and the expense store
//! - `budget` - Monthly budgets and the budget store
//! - `report` - Month/category grouping and budget status
//! - `tracker` - Owned state combining both stores

pub mod budget;
pub mod expense;
pub mod report;
pub mod tracker;

pub use tracker::Tracker;

use rust_decimal::Decimal;

/// Largest amount accepted for a single expense or budget (1,000,000,000).
///
/// Keeps every running total far below `Decimal::MAX`, so summing stored
/// amounts cannot overflow.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);
