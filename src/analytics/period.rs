//! This file defines the time periods that summaries can be computed over,
//! the per-category summary, and the per-type totals.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Category, Transaction, TransactionType};

/// A window of time ending today, aligned to calendar boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    /// Today only.
    Day,
    /// The current week, starting on Monday.
    Week,
    /// The current calendar month.
    Month,
    /// The current calendar quarter.
    Quarter,
    /// The current calendar half-year (January-June or July-December).
    HalfYear,
    /// The current calendar year.
    Year,
    /// No time constraint.
    #[default]
    All,
}

impl Period {
    /// The first date included in the period ending on `today`, or `None` if
    /// the period is unbounded.
    ///
    /// The bounded periods start on the first day of a month, so the date
    /// constructors below always succeed for a valid `today`.
    pub fn start(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Period::Day => Some(today),
            Period::Week => {
                let days_from_monday = today.weekday().num_days_from_monday() as u64;
                Some(today - Days::new(days_from_monday))
            }
            Period::Month => NaiveDate::from_ymd_opt(today.year(), today.month(), 1),
            Period::Quarter => {
                let quarter_start_month = (today.month0() / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(today.year(), quarter_start_month, 1)
            }
            Period::HalfYear => {
                let half_start_month = if today.month() < 7 { 1 } else { 7 };
                NaiveDate::from_ymd_opt(today.year(), half_start_month, 1)
            }
            Period::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            Period::All => None,
        }
    }
}

/// The summed amount for a single category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    /// The name of the category.
    pub name: String,
    /// The sum of the amounts of the category's transactions.
    pub total: f64,
}

/// Sum the transactions dated within `period` (ending on `today`) by category
/// name, sorted by descending total.
///
/// Transactions whose category is not in `categories` are skipped. Categories
/// with equal totals keep the order in which they first appear in
/// `transactions`.
pub fn summarize_by_category(
    transactions: &[Transaction],
    categories: &[Category],
    period: Period,
    today: NaiveDate,
) -> Vec<CategorySummary> {
    let start = period.start(today);

    let mut summaries: Vec<CategorySummary> = Vec::new();

    for transaction in transactions {
        if start.is_some_and(|start| transaction.date < start) {
            continue;
        }

        let Some(category) = categories
            .iter()
            .find(|category| category.id == transaction.category_id)
        else {
            continue;
        };

        match summaries
            .iter_mut()
            .find(|summary| summary.name == category.name.as_ref())
        {
            Some(summary) => summary.total += transaction.amount,
            None => summaries.push(CategorySummary {
                name: category.name.to_string(),
                total: transaction.amount,
            }),
        }
    }

    summaries.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    summaries
}

/// The summed amounts per transaction type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    /// The sum of all income transactions.
    pub income: f64,
    /// The sum of all expense transactions.
    pub expense: f64,
    /// The sum of all plan transactions.
    pub plan: f64,
    /// Income minus expense.
    pub balance: f64,
}

/// Sum `transactions` per type and compute the balance (income minus
/// expense).
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();

    for transaction in transactions {
        match transaction.kind {
            TransactionType::Income => totals.income += transaction.amount,
            TransactionType::Expense => totals.expense += transaction.amount,
            TransactionType::Plan => totals.plan += transaction.amount,
        }
    }

    totals.balance = totals.income - totals.expense;

    totals
}


#[cfg(test)]
mod summary_tests {
    use chrono::NaiveDate;

    use crate::{
        analytics::FilterConfig,
        models::{Category, CategoryName, Transaction, TransactionType, UserID},
    };

    use super::{summarize_by_category, totals, Period};

    fn category(id: i64, name: &str, kind: TransactionType) -> Category {
        Category {
            id,
            user_id: UserID::new(1),
            name: CategoryName::new_unchecked(name.to_string()),
            kind,
            is_default: true,
        }
    }

    fn transaction(
        id: i64,
        category_id: i64,
        amount: f64,
        date: NaiveDate,
        kind: TransactionType,
    ) -> Transaction {
        Transaction {
            id,
            user_id: UserID::new(1),
            category_id,
            title: format!("transaction {id}"),
            amount,
            date,
            kind,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn empty_input_gives_empty_summary() {
        let summaries = summarize_by_category(&[], &[], Period::All, date(2024, 5, 17));

        assert!(summaries.is_empty());
    }

    #[test]
    fn summaries_are_sorted_by_descending_total() {
        let today = date(2024, 5, 17);
        let categories = vec![
            category(1, "Food", TransactionType::Expense),
            category(2, "Housing", TransactionType::Expense),
            category(3, "Transport", TransactionType::Expense),
        ];
        let transactions = vec![
            transaction(1, 1, 20.0, today, TransactionType::Expense),
            transaction(2, 2, 900.0, today, TransactionType::Expense),
            transaction(3, 3, 35.0, today, TransactionType::Expense),
            transaction(4, 1, 25.0, today, TransactionType::Expense),
        ];

        let summaries = summarize_by_category(&transactions, &categories, Period::All, today);

        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Housing", "Food", "Transport"]);
        assert!(summaries.windows(2).all(|w| w[0].total >= w[1].total));
    }

    #[test]
    fn transactions_before_period_start_are_excluded() {
        let today = date(2024, 5, 17);
        let categories = vec![category(1, "Food", TransactionType::Expense)];
        let transactions = vec![
            transaction(1, 1, 10.0, date(2024, 4, 30), TransactionType::Expense),
            transaction(2, 1, 7.5, date(2024, 5, 1), TransactionType::Expense),
        ];

        let summaries = summarize_by_category(&transactions, &categories, Period::Month, today);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].total, 7.5);
    }

    #[test]
    fn transactions_with_unknown_categories_are_skipped() {
        let today = date(2024, 5, 17);
        let categories = vec![category(1, "Food", TransactionType::Expense)];
        let transactions = vec![
            transaction(1, 1, 10.0, today, TransactionType::Expense),
            transaction(2, 99, 10.0, today, TransactionType::Expense),
        ];

        let summaries = summarize_by_category(&transactions, &categories, Period::All, today);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "Food");
    }

    #[test]
    fn filter_then_summarize_two_transaction_scenario() {
        // One income and one expense in the same week: filtering by expense
        // then summarizing must produce a single entry with the expense sum.
        let today = date(2024, 5, 17);
        let categories = vec![
            category(1, "Food", TransactionType::Expense),
            category(2, "Salary", TransactionType::Income),
        ];
        let transactions = vec![
            transaction(1, 2, 3200.0, date(2024, 5, 13), TransactionType::Income),
            transaction(2, 1, 54.2, date(2024, 5, 15), TransactionType::Expense),
        ];

        let expenses = FilterConfig {
            kind: Some(TransactionType::Expense),
            ..Default::default()
        }
        .apply(&transactions);

        let summaries = summarize_by_category(&expenses, &categories, Period::Week, today);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "Food");
        assert_eq!(summaries[0].total, 54.2);
    }

    #[test]
    fn totals_balance_is_income_minus_expense() {
        let today = date(2024, 5, 17);
        let transactions = vec![
            transaction(1, 1, 3200.0, today, TransactionType::Income),
            transaction(2, 2, 700.0, today, TransactionType::Expense),
            transaction(3, 3, 150.0, today, TransactionType::Plan),
        ];

        let totals = totals(&transactions);

        assert_eq!(totals.income, 3200.0);
        assert_eq!(totals.expense, 700.0);
        assert_eq!(totals.plan, 150.0);
        assert_eq!(totals.balance, 2500.0);
    }
}
