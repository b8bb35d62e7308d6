//! This module defines the traits for creating and retrieving the
//! application's domain types from a database, and their SQLite
//! implementations.

use email_address::EmailAddress;

use crate::{
    models::{
        Category, CategoryName, DatabaseID, NewTransaction, PasswordHash, Transaction,
        TransactionType, User, UserID,
    },
    Error,
};

pub mod sqlite;

/// Create and retrieve users from a database.
pub trait UserStore: Send + Sync {
    /// Create a new user.
    ///
    /// # Errors
    /// Returns [Error::DuplicateEmail] if `email` is already in use, or an
    /// error if there is an unexpected SQL error.
    fn create(
        &mut self,
        name: String,
        email: EmailAddress,
        password_hash: PasswordHash,
    ) -> Result<User, Error>;

    /// Get the user with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no such user, or an error if
    /// there is an unexpected SQL error.
    fn get(&self, id: UserID) -> Result<User, Error>;

    /// Get the user with `email`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no such user, or an error if
    /// there is an unexpected SQL error.
    fn get_by_email(&self, email: &EmailAddress) -> Result<User, Error>;

    /// Set the avatar of the user with `id` to the data URL `avatar_url`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no such user, or an error if
    /// there is an unexpected SQL error.
    fn set_avatar(&mut self, id: UserID, avatar_url: &str) -> Result<(), Error>;
}

/// Create and retrieve transaction categories from a database.
pub trait CategoryStore: Send + Sync {
    /// Create a new category for the user `user_id`.
    ///
    /// # Errors
    /// Returns [Error::DuplicateCategory] if the user already has a category
    /// with the same name (ignoring case) and type, or an error if there is
    /// an unexpected SQL error.
    fn create(
        &mut self,
        user_id: UserID,
        name: CategoryName,
        kind: TransactionType,
        is_default: bool,
    ) -> Result<Category, Error>;

    /// Get the category with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no such category, or an error if
    /// there is an unexpected SQL error.
    fn get(&self, id: DatabaseID) -> Result<Category, Error>;

    /// Get the categories of the user `user_id` in creation order.
    ///
    /// # Errors
    /// Returns an error if there is an unexpected SQL error.
    fn get_by_user(&self, user_id: UserID) -> Result<Vec<Category>, Error>;

    /// Delete the category with `id` belonging to the user `user_id`, along
    /// with its transactions.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if the user has no such category,
    /// [Error::DefaultCategory] if the category was seeded at registration,
    /// or an error if there is an unexpected SQL error.
    fn delete(&mut self, id: DatabaseID, user_id: UserID) -> Result<(), Error>;
}

/// Create and retrieve transactions from a database.
pub trait TransactionStore: Send + Sync {
    /// Create a new transaction.
    ///
    /// # Errors
    /// Returns an error if there is an unexpected SQL error.
    fn create(&mut self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Get the transactions of the user `user_id`, newest first.
    ///
    /// # Errors
    /// Returns an error if there is an unexpected SQL error.
    fn get_by_user(&self, user_id: UserID) -> Result<Vec<Transaction>, Error>;

    /// Delete the transaction with `id` belonging to the user `user_id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if the user has no such transaction, or an
    /// error if there is an unexpected SQL error.
    fn delete(&mut self, id: DatabaseID, user_id: UserID) -> Result<(), Error>;

    /// Delete all transactions of the user `user_id`.
    ///
    /// # Errors
    /// Returns an error if there is an unexpected SQL error.
    fn delete_by_user(&mut self, user_id: UserID) -> Result<(), Error>;
}
