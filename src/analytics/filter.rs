//! This file defines the filter predicates that can be applied to a list of
//! transactions.

use chrono::NaiveDate;

use crate::models::{DatabaseID, Transaction, TransactionType};

/// A set of optional predicates over transactions.
///
/// A transaction is kept when it satisfies every predicate that is set.
/// The default config has no predicates set and keeps everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterConfig {
    /// Keep transactions of this type.
    pub kind: Option<TransactionType>,
    /// Keep transactions belonging to this category.
    pub category: Option<DatabaseID>,
    /// Keep transactions dated on or after this date.
    pub start_date: Option<NaiveDate>,
    /// Keep transactions dated on or before this date.
    pub end_date: Option<NaiveDate>,
    /// Keep transactions whose title contains this string, ignoring case.
    pub search: Option<String>,
    /// Keep transactions with an amount of at least this value.
    pub min_amount: Option<f64>,
}

impl FilterConfig {
    /// The transactions in `transactions` that satisfy every active predicate.
    ///
    /// The relative order of the input is preserved.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        // An empty search string should behave as if no search was given.
        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|search| !search.is_empty())
            .map(str::to_lowercase);

        transactions
            .iter()
            .filter(|transaction| self.matches(transaction, search.as_deref()))
            .cloned()
            .collect()
    }

    fn matches(&self, transaction: &Transaction, search: Option<&str>) -> bool {
        if self.kind.is_some_and(|kind| transaction.kind != kind) {
            return false;
        }

        if self
            .category
            .is_some_and(|category| transaction.category_id != category)
        {
            return false;
        }

        if self.start_date.is_some_and(|start| transaction.date < start) {
            return false;
        }

        if self.end_date.is_some_and(|end| transaction.date > end) {
            return false;
        }

        if search.is_some_and(|search| !transaction.title.to_lowercase().contains(search)) {
            return false;
        }

        if self.min_amount.is_some_and(|min| transaction.amount < min) {
            return false;
        }

        true
    }
}
