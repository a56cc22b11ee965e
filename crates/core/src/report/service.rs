//! Report generation service.

use std::collections::BTreeMap;

use expense_tracker_shared::YearMonth;
use rust_decimal::Decimal;

use super::types::{CategoryGroup, ExpenseReport, MonthlyGroup};
use crate::expense::Expense;

/// Service for building expense reports.
pub struct ReportService;

impl ReportService {
    /// Groups expenses by month and category.
    ///
    /// Category names match exactly (case-sensitive) and sort by ordinal
    /// string comparison, as do descriptions. Months are returned newest
    /// first. `budget_for` is consulted once per month present.
    #[must_use]
    pub fn monthly_groups<F>(expenses: &[Expense], budget_for: F) -> Vec<MonthlyGroup>
    where
        F: Fn(YearMonth) -> Option<Decimal>,
    {
        let mut months: BTreeMap<YearMonth, BTreeMap<&str, Vec<&Expense>>> = BTreeMap::new();

        for expense in expenses {
            months
                .entry(YearMonth::of(expense.date))
                .or_default()
                .entry(expense.category.as_str())
                .or_default()
                .push(expense);
        }

        months
            .into_iter()
            .rev()
            .map(|(period, categories)| {
                let categories: Vec<CategoryGroup> = categories
                    .into_iter()
                    .map(|(category, items)| Self::category_group(category, items))
                    .collect();
                let total: Decimal = categories.iter().map(|c| c.total).sum();

                Self::month_group(period, total, categories, budget_for(period))
            })
            .collect()
    }

    /// Builds the full report: grand total plus monthly groups.
    #[must_use]
    pub fn generate<F>(expenses: &[Expense], budget_for: F) -> ExpenseReport
    where
        F: Fn(YearMonth) -> Option<Decimal>,
    {
        ExpenseReport {
            total: expenses.iter().map(|e| e.amount).sum(),
            months: Self::monthly_groups(expenses, budget_for),
        }
    }

    fn category_group(category: &str, mut items: Vec<&Expense>) -> CategoryGroup {
        // stable: full ties keep insertion order
        items.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.description.cmp(&b.description))
        });

        CategoryGroup {
            category: category.to_string(),
            total: items.iter().map(|e| e.amount).sum(),
            expenses: items.into_iter().cloned().collect(),
        }
    }

    fn month_group(
        period: YearMonth,
        total: Decimal,
        categories: Vec<CategoryGroup>,
        budget: Option<Decimal>,
    ) -> MonthlyGroup {
        let remaining = budget.map(|b| b - total);

        MonthlyGroup {
            year: period.year,
            month: period.month,
            total,
            categories,
            budget,
            remaining,
            is_over_budget: remaining.is_some_and(|r| r < Decimal::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn expense(y: i32, m: u32, d: u32, category: &str, description: &str, amount: Decimal) -> Expense {
        Expense {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            category: category.to_string(),
            description: description.to_string(),
            amount,
        }
    }

    fn no_budget(_: YearMonth) -> Option<Decimal> {
        None
    }

    #[test]
    fn test_empty_input_yields_empty_report() {
        let report = ReportService::generate(&[], no_budget);
        assert!(report.months.is_empty());
        assert_eq!(report.total, Decimal::ZERO);
    }

    #[test]
    fn test_months_newest_first_with_budget_status() {
        let expenses = vec![
            expense(2025, 11, 1, "Food", "", dec!(10)),
            expense(2025, 11, 15, "Food", "", dec!(5)),
            expense(2025, 12, 1, "Rent", "", dec!(800)),
        ];
        let budget_for = |period: YearMonth| {
            (period == YearMonth::new(2025, 11)).then_some(dec!(20))
        };

        let groups = ReportService::monthly_groups(&expenses, budget_for);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].period(), YearMonth::new(2025, 12));
        assert_eq!(groups[1].period(), YearMonth::new(2025, 11));

        let december = &groups[0];
        assert_eq!(december.total, dec!(800));
        assert_eq!(december.budget, None);
        assert_eq!(december.remaining, None);
        assert!(!december.is_over_budget);

        let november = &groups[1];
        assert_eq!(november.categories.len(), 1);
        assert_eq!(november.categories[0].category, "Food");
        assert_eq!(november.categories[0].total, dec!(15));
        assert_eq!(november.total, dec!(15));
        assert_eq!(november.budget, Some(dec!(20)));
        assert_eq!(november.remaining, Some(dec!(5)));
        assert!(!november.is_over_budget);
    }

    #[test]
    fn test_remaining_exactly_zero_is_not_over_budget() {
        let expenses = vec![expense(2025, 3, 4, "Food", "", dec!(20))];
        let groups = ReportService::monthly_groups(&expenses, |_| Some(dec!(20)));

        assert_eq!(groups[0].remaining, Some(dec!(0)));
        assert!(!groups[0].is_over_budget);
    }

    #[test]
    fn test_negative_remaining_is_over_budget() {
        let expenses = vec![expense(2025, 3, 4, "Food", "", dec!(20.01))];
        let groups = ReportService::monthly_groups(&expenses, |_| Some(dec!(20)));

        assert_eq!(groups[0].remaining, Some(dec!(-0.01)));
        assert!(groups[0].is_over_budget);
    }

    #[test]
    fn test_same_date_sorts_by_description() {
        let expenses = vec![
            expense(2025, 5, 2, "Food", "dinner", dec!(30)),
            expense(2025, 5, 2, "Food", "breakfast", dec!(8)),
            expense(2025, 5, 1, "Food", "zucchini", dec!(3)),
        ];
        let groups = ReportService::monthly_groups(&expenses, no_budget);

        let descriptions: Vec<_> = groups[0].categories[0]
            .expenses
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["zucchini", "breakfast", "dinner"]);
    }

    #[test]
    fn test_categories_are_case_sensitive_and_sorted() {
        let expenses = vec![
            expense(2025, 5, 2, "food", "", dec!(1)),
            expense(2025, 5, 2, "Transport", "", dec!(2)),
            expense(2025, 5, 2, "Food", "", dec!(4)),
        ];
        let groups = ReportService::monthly_groups(&expenses, no_budget);

        let names: Vec<_> = groups[0]
            .categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(names, vec!["Food", "Transport", "food"]);
        assert_eq!(groups[0].total, dec!(7));
    }

    #[test]
    fn test_months_sort_across_years() {
        let expenses = vec![
            expense(2024, 12, 31, "Misc", "", dec!(1)),
            expense(2025, 1, 1, "Misc", "", dec!(1)),
            expense(2023, 6, 1, "Misc", "", dec!(1)),
        ];
        let groups = ReportService::monthly_groups(&expenses, no_budget);

        let periods: Vec<String> = groups.iter().map(|g| g.period().to_string()).collect();
        assert_eq!(periods, vec!["2025-01", "2024-12", "2023-06"]);
    }

    #[test]
    fn test_budget_lookup_only_for_present_months() {
        use std::cell::RefCell;

        let asked = RefCell::new(Vec::new());
        let expenses = vec![expense(2025, 2, 1, "Misc", "", dec!(1))];
        let _ = ReportService::monthly_groups(&expenses, |period| {
            asked.borrow_mut().push(period);
            None
        });

        assert_eq!(asked.into_inner(), vec![YearMonth::new(2025, 2)]);
    }
}
