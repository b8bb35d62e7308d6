//! This file defines the transaction type, the shared transaction/category
//! type enum, and the data needed to create a new transaction.

use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};

use crate::models::{DatabaseID, UserID};

/// Whether a transaction (or a category) records money spent, money earned,
/// or a planned amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money spent.
    Expense,
    /// Money earned.
    Income,
    /// A planned, not yet realized, amount.
    Plan,
}

impl TransactionType {
    /// The lowercase string used on the wire and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
            TransactionType::Plan => "plan",
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "expense" => Ok(TransactionType::Expense),
            "income" => Ok(TransactionType::Income),
            "plan" => Ok(TransactionType::Plan),
            other => Err(format!("'{other}' is not a valid transaction type")),
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|message: String| FromSqlError::Other(message.into()))
    }
}

/// A record of money spent, earned, or planned on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: DatabaseID,
    /// The ID of the user that created the transaction.
    pub user_id: UserID,
    /// The ID of the category the transaction belongs to.
    pub category_id: DatabaseID,
    /// A short description of the transaction.
    pub title: String,
    /// The amount of money, always positive.
    pub amount: f64,
    /// The calendar date the transaction occurred on.
    #[serde(rename = "spent_on")]
    pub date: NaiveDate,
    /// Whether the transaction is an expense, income, or plan.
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// The data for creating a transaction via a
/// [TransactionStore](crate::stores::TransactionStore).
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The ID of the user creating the transaction.
    pub user_id: UserID,
    /// The ID of the category the transaction belongs to.
    pub category_id: DatabaseID,
    /// A short description of the transaction.
    pub title: String,
    /// The amount of money, always positive.
    pub amount: f64,
    /// The calendar date the transaction occurred on.
    pub date: NaiveDate,
    /// Whether the transaction is an expense, income, or plan.
    pub kind: TransactionType,
}

#[cfg(test)]
mod transaction_type_tests {
    use super::TransactionType;

    #[test]
    fn serializes_as_lowercase() {
        let json = serde_json::to_string(&TransactionType::Expense).unwrap();

        assert_eq!(json, "\"expense\"");
    }

    #[test]
    fn deserializes_from_lowercase() {
        let kind: TransactionType = serde_json::from_str("\"income\"").unwrap();

        assert_eq!(kind, TransactionType::Income);
    }

    #[test]
    fn parses_wire_strings() {
        assert_eq!("expense".parse(), Ok(TransactionType::Expense));
        assert_eq!("income".parse(), Ok(TransactionType::Income));
        assert_eq!("plan".parse(), Ok(TransactionType::Plan));
        assert!("all".parse::<TransactionType>().is_err());
    }
}

#[cfg(test)]
mod transaction_tests {
    use chrono::NaiveDate;

    use crate::models::UserID;

    use super::{Transaction, TransactionType};

    #[test]
    fn serializes_with_wire_field_names() {
        let transaction = Transaction {
            id: 1,
            user_id: UserID::new(1),
            category_id: 2,
            title: "Groceries".to_string(),
            amount: 42.5,
            date: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            kind: TransactionType::Expense,
        };

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(json.get("spent_on").unwrap(), "2024-05-17");
        assert_eq!(json.get("type").unwrap(), "expense");
        assert!(json.get("date").is_none());
        assert!(json.get("kind").is_none());
    }
}
