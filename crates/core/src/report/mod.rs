//! Monthly expense report generation.
//!
//! Groups expenses by calendar month and category and annotates each month
//! with its budget status:
//! - Months newest first
//! - Categories by name, expenses by date then description
//! - Totals at every level

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::{CategoryGroup, ExpenseReport, MonthlyGroup};
