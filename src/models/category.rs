//! This file defines the category type used to label transactions, and a
//! wrapper type that ensures category names are not empty.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    models::{DatabaseID, TransactionType, UserID},
    Error,
};

/// The name of a category. The inner string is guaranteed to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name from `name`, trimming surrounding whitespace.
    ///
    /// # Errors
    /// Returns [Error::EmptyCategoryName] if the trimmed string is empty.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            return Err(Error::EmptyCategoryName);
        }

        Ok(Self(name.to_string()))
    }

    /// Create a category name without validation, e.g. from a string
    /// retrieved from the application database.
    pub fn new_unchecked(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A label that a user can attach to their transactions.
///
/// Names are unique per user and transaction type, ignoring case. The
/// categories seeded at registration have `is_default` set and cannot be
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The ID of the category.
    pub id: DatabaseID,
    /// The ID of the user that owns the category.
    pub user_id: UserID,
    /// The name of the category.
    pub name: CategoryName,
    /// The type of transaction the category applies to.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Whether the category was seeded at registration.
    pub is_default: bool,
}
