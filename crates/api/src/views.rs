//! Server-side rendering of the expense tracker page.

use std::fmt::{self, Write};

use expense_tracker_core::budget::Budget;
use expense_tracker_core::expense::Expense;
use expense_tracker_core::report::MonthlyGroup;
use expense_tracker_shared::FieldError;
use rust_decimal::Decimal;

use crate::forms::{BudgetForm, ExpenseForm};

/// Everything the index page displays.
pub struct IndexPage<'a> {
    /// Symbol prefixed to amounts.
    pub currency_symbol: &'a str,
    /// Confirmation shown after a successful submission.
    pub notice: Option<&'a str>,
    /// Add-expense form values.
    pub expense_form: &'a ExpenseForm,
    /// Messages for the add-expense form.
    pub expense_errors: &'a [FieldError],
    /// Set-budget form values.
    pub budget_form: &'a BudgetForm,
    /// Messages for the set-budget form.
    pub budget_errors: &'a [FieldError],
    /// All expenses in insertion order.
    pub expenses: &'a [Expense],
    /// Sum of all expenses.
    pub total: Decimal,
    /// Budgets set so far, chronological.
    pub budgets: &'a [Budget],
    /// Monthly report, newest first.
    pub months: &'a [MonthlyGroup],
}

/// Renders the full page.
///
/// # Errors
///
/// Returns an error if writing to the output buffer fails.
pub fn render_index(page: &IndexPage<'_>) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(8 * 1024);

    out.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Expense Tracker</title>\n</head>\n<body>\n<h1>Expense Tracker</h1>\n",
    );

    if let Some(notice) = page.notice {
        writeln!(out, "<p class=\"notice\">{}</p>", escape(notice))?;
    }

    render_expense_form(&mut out, page.expense_form, page.expense_errors)?;
    render_budget_form(&mut out, page.budget_form, page.budget_errors, page)?;
    render_expense_list(&mut out, page)?;
    render_report(&mut out, page)?;

    out.push_str("</body>\n</html>\n");
    Ok(out)
}

fn render_expense_form(
    out: &mut String,
    form: &ExpenseForm,
    errors: &[FieldError],
) -> fmt::Result {
    out.push_str("<section id=\"add-expense\">\n<h2>Add expense</h2>\n");
    out.push_str("<form method=\"post\" action=\"/expenses\">\n");
    input(out, "Date", "date", "date", &form.date, errors)?;
    input(out, "Category", "text", "category", &form.category, errors)?;
    input(out, "Description", "text", "description", &form.description, errors)?;
    input(out, "Amount", "number", "amount", &form.amount, errors)?;
    out.push_str("<button type=\"submit\">Add</button>\n</form>\n</section>\n");
    Ok(())
}

fn render_budget_form(
    out: &mut String,
    form: &BudgetForm,
    errors: &[FieldError],
    page: &IndexPage<'_>,
) -> fmt::Result {
    out.push_str("<section id=\"set-budget\">\n<h2>Monthly budget</h2>\n");
    out.push_str("<form method=\"post\" action=\"/budgets\">\n");
    input(out, "Year", "number", "year", &form.year, errors)?;
    input(out, "Month", "number", "month", &form.month, errors)?;
    input(out, "Budget", "number", "budget", &form.budget, errors)?;
    out.push_str("<button type=\"submit\">Set budget</button>\n</form>\n");

    if !page.budgets.is_empty() {
        out.push_str("<ul class=\"budgets\">\n");
        for budget in page.budgets {
            writeln!(
                out,
                "<li>{}: {}</li>",
                budget.period(),
                money(page.currency_symbol, budget.amount)
            )?;
        }
        out.push_str("</ul>\n");
    }

    out.push_str("</section>\n");
    Ok(())
}

fn render_expense_list(out: &mut String, page: &IndexPage<'_>) -> fmt::Result {
    out.push_str("<section id=\"expenses\">\n<h2>Expenses</h2>\n");

    if page.expenses.is_empty() {
        out.push_str("<p>No expenses yet.</p>\n");
    } else {
        out.push_str(
            "<table>\n<thead><tr><th>Date</th><th>Category</th><th>Description</th>\
             <th>Amount</th></tr></thead>\n<tbody>\n",
        );
        for expense in page.expenses {
            expense_row(out, page.currency_symbol, expense, true)?;
        }
        out.push_str("</tbody>\n</table>\n");
    }

    writeln!(
        out,
        "<p class=\"total\">Total: {}</p>\n</section>",
        money(page.currency_symbol, page.total)
    )
}

fn render_report(out: &mut String, page: &IndexPage<'_>) -> fmt::Result {
    out.push_str("<section id=\"report\">\n<h2>Monthly report</h2>\n");

    if page.months.is_empty() {
        out.push_str("<p>Nothing to report.</p>\n");
    }

    for month in page.months {
        let period = month.period();
        writeln!(
            out,
            "<article class=\"month\" data-month=\"{period}\">\n<h3>{} {} ({period})</h3>",
            period.month_name().unwrap_or("Month"),
            period.year,
        )?;
        writeln!(
            out,
            "<p>Spent: {}</p>",
            money(page.currency_symbol, month.total)
        )?;

        match (month.budget, month.remaining) {
            (Some(budget), Some(remaining)) => {
                let class = if month.is_over_budget {
                    "over-budget"
                } else {
                    "within-budget"
                };
                writeln!(
                    out,
                    "<p class=\"{class}\">Budget: {} &middot; Remaining: {}{}</p>",
                    money(page.currency_symbol, budget),
                    money(page.currency_symbol, remaining),
                    if month.is_over_budget {
                        " &middot; Over budget"
                    } else {
                        ""
                    },
                )?;
            }
            _ => out.push_str("<p class=\"no-budget\">No budget set.</p>\n"),
        }

        for category in &month.categories {
            writeln!(
                out,
                "<h4>{} &mdash; {}</h4>\n<table class=\"category\">\n<tbody>",
                escape(&category.category),
                money(page.currency_symbol, category.total)
            )?;
            for expense in &category.expenses {
                expense_row(out, page.currency_symbol, expense, false)?;
            }
            out.push_str("</tbody>\n</table>\n");
        }

        out.push_str("</article>\n");
    }

    out.push_str("</section>\n");
    Ok(())
}

fn expense_row(
    out: &mut String,
    symbol: &str,
    expense: &Expense,
    with_category: bool,
) -> fmt::Result {
    write!(out, "<tr><td>{}</td>", expense.date)?;
    if with_category {
        write!(out, "<td>{}</td>", escape(&expense.category))?;
    }
    writeln!(
        out,
        "<td>{}</td><td>{}</td></tr>",
        escape(&expense.description),
        money(symbol, expense.amount)
    )
}

fn input(
    out: &mut String,
    label: &str,
    kind: &str,
    name: &str,
    value: &str,
    errors: &[FieldError],
) -> fmt::Result {
    let step = if kind == "number" && matches!(name, "amount" | "budget") {
        " step=\"0.01\""
    } else {
        ""
    };
    writeln!(
        out,
        "<label>{label} <input type=\"{kind}\" name=\"{name}\" value=\"{}\"{step}></label>",
        escape(value)
    )?;
    for error in errors.iter().filter(|e| e.field == name) {
        writeln!(
            out,
            "<span class=\"field-error\" data-field=\"{name}\">{}</span>",
            escape(&error.message)
        )?;
    }
    Ok(())
}

/// Formats an amount with two decimals and the currency symbol, sign first.
pub fn money(symbol: &str, amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{symbol}{:.2}", rounded.abs())
    } else {
        format!("{symbol}{:.2}", rounded.abs())
    }
}

/// Escapes text for use in HTML content and attribute values.
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
