//! This file defines a wrapper type around bcrypt password hashes.

use std::fmt::Display;

use bcrypt::BcryptError;

use crate::Error;

/// The default cost used for hashing new passwords.
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// A bcrypt hash of a user's password.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash `raw_password` with the given bcrypt `cost`.
    ///
    /// # Errors
    /// Returns [Error::MissingField] if `raw_password` is empty, or
    /// [Error::HashingError] if the underlying hashing function fails.
    pub fn from_raw_password(raw_password: &str, cost: u32) -> Result<Self, Error> {
        if raw_password.is_empty() {
            return Err(Error::MissingField("password"));
        }

        let hash = bcrypt::hash(raw_password, cost)
            .map_err(|error| Error::HashingError(error.to_string()))?;

        Ok(Self(hash))
    }

    /// Create a password hash from a string that is assumed to be a valid
    /// bcrypt hash, e.g. one retrieved from the application database.
    pub fn new_unchecked(hash: String) -> Self {
        Self(hash)
    }

    /// Check whether `raw_password` matches this hash.
    pub fn verify(&self, raw_password: &str) -> Result<bool, BcryptError> {
        bcrypt::verify(raw_password, &self.0)
    }
}

impl Display for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
