//! Shared types, errors, and configuration for the expense tracker.
//!
//! This crate provides common types used across all other crates:
//! - Calendar month keys for budgets and report groups
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult, FieldError};
pub use types::YearMonth;
