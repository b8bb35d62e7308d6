//! This module defines the domain types for the application and the
//! validation rules for creating them.

pub use category::{Category, CategoryName};
pub use password::{PasswordHash, DEFAULT_COST};
pub use transaction::{NewTransaction, Transaction, TransactionType};
pub use user::{PublicProfile, User, UserID, UserProfile};

mod category;
mod password;
mod transaction;
mod user;

/// Alias for the integer type used for database row IDs.
pub type DatabaseID = i64;
