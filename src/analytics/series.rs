//! This file defines the daily time series used for the activity chart.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::models::{Transaction, TransactionType};

/// The number of days covered by [daily_series].
pub const SERIES_DAYS: u64 = 7;

/// The summed amounts per transaction type for a single day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    /// The calendar date of this point.
    pub date: NaiveDate,
    /// The sum of the day's income transactions.
    pub income: f64,
    /// The sum of the day's expense transactions.
    pub expense: f64,
    /// The sum of the day's plan transactions.
    pub plan: f64,
}

/// Sum `transactions` per type for each of the last [SERIES_DAYS] days ending
/// on `today`, oldest day first.
///
/// The result always has exactly [SERIES_DAYS] points. Days without
/// transactions are included with zero sums.
pub fn daily_series(transactions: &[Transaction], today: NaiveDate) -> Vec<DailyPoint> {
    (0..SERIES_DAYS)
        .rev()
        .map(|offset| {
            let date = today - Days::new(offset);

            let mut point = DailyPoint {
                date,
                income: 0.0,
                expense: 0.0,
                plan: 0.0,
            };

            for transaction in transactions.iter().filter(|t| t.date == date) {
                match transaction.kind {
                    TransactionType::Income => point.income += transaction.amount,
                    TransactionType::Expense => point.expense += transaction.amount,
                    TransactionType::Plan => point.plan += transaction.amount,
                }
            }

            point
        })
        .collect()
}
