//! HTML form bindings for the page submissions.
//!
//! Fields arrive as raw strings so that rejected input can be echoed back
//! into the form unchanged.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use expense_tracker_core::budget::validate_budget_amount;
use expense_tracker_core::expense::{NewExpense, validate_expense};
use expense_tracker_shared::FieldError;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Add-expense form as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExpenseForm {
    /// Date in `YYYY-MM-DD` form.
    pub date: String,
    /// Category name.
    pub category: String,
    /// Optional description.
    pub description: String,
    /// Decimal amount.
    pub amount: String,
}

impl ExpenseForm {
    /// A blank form dated `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }

    /// The form shown after a successful add: everything cleared except the date.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self {
            date: self.date.clone(),
            ..Self::default()
        }
    }

    /// Converts the raw fields into an expense submission.
    ///
    /// An amount that is blank or not a number counts as zero and so fails
    /// the positive-amount rule. A bad date is reported alongside any other
    /// rule the submission breaks.
    ///
    /// # Errors
    ///
    /// Returns field errors when the date cannot be parsed.
    pub fn parse(&self) -> Result<NewExpense, Vec<FieldError>> {
        let date = parse_date(&self.date);
        let input = NewExpense {
            date: *date.as_ref().unwrap_or(&NaiveDate::MIN),
            category: self.category.clone(),
            description: Some(self.description.clone()),
            amount: parse_amount(&self.amount),
        };

        match date {
            Ok(_) => Ok(input),
            Err(date_error) => {
                let mut errors = vec![date_error];
                if let Err(rules) = validate_expense(input) {
                    errors.extend(rules.into_iter().map(FieldError::from));
                }
                Err(errors)
            }
        }
    }
}

/// Set-budget form as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BudgetForm {
    /// Calendar year.
    pub year: String,
    /// Month number.
    pub month: String,
    /// Decimal budget amount.
    pub budget: String,
}

/// A parsed set-budget submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSubmission {
    /// Calendar year.
    pub year: i32,
    /// Month number, not range-checked.
    pub month: u32,
    /// Budget amount.
    pub amount: Decimal,
}

impl BudgetForm {
    /// A blank form for the month containing `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            year: today.year().to_string(),
            month: today.month().to_string(),
            budget: String::new(),
        }
    }

    /// The form shown after a successful submission: same month, amount cleared.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self {
            year: self.year.clone(),
            month: self.month.clone(),
            budget: String::new(),
        }
    }

    /// Converts the raw fields into a budget submission.
    ///
    /// # Errors
    ///
    /// Returns field errors when the year or month is not a whole number.
    pub fn parse(&self) -> Result<BudgetSubmission, Vec<FieldError>> {
        let mut errors = Vec::new();

        let year = self.year.trim().parse::<i32>().map_err(|_| {
            errors.push(FieldError::new("year", "Year must be a whole number."));
        });
        let month = self.month.trim().parse::<u32>().map_err(|_| {
            errors.push(FieldError::new("month", "Month must be a whole number."));
        });
        let amount = parse_amount(&self.budget);

        match (year, month) {
            (Ok(year), Ok(month)) => Ok(BudgetSubmission {
                year,
                month,
                amount,
            }),
            _ => {
                if let Err(rule) = validate_budget_amount(amount) {
                    errors.push(rule.into());
                }
                Err(errors)
            }
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::new("date", "Date is required."));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| FieldError::new("date", "Date must be a valid date (YYYY-MM-DD)."))
}

pub(crate) fn parse_amount(raw: &str) -> Decimal {
    Decimal::from_str(raw.trim()).unwrap_or(Decimal::ZERO)
}

/// Text of a JSON field as a form would carry it.
///
/// Strings and numbers keep their text; anything else, including a missing
/// field, reads as blank.
pub(crate) fn json_field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
