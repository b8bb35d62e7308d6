//! The SQLite implementation of [UserStore].

use std::{
    str::FromStr,
    sync::{Arc, Mutex},
};

use email_address::EmailAddress;
use rusqlite::{Connection, Row};

use crate::{
    db::{CreateTable, MapRow},
    models::{PasswordHash, User, UserID},
    stores::UserStore,
    Error,
};

/// Stores users in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteUserStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteUserStore {
    /// Create a new store that uses the given database connection.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl UserStore for SQLiteUserStore {
    /// Create a new user.
    ///
    /// # Panics
    /// Panics if the database connection mutex is poisoned.
    fn create(
        &mut self,
        name: String,
        email: EmailAddress,
        password_hash: PasswordHash,
    ) -> Result<User, Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "INSERT INTO user (name, email, password) VALUES (?1, ?2, ?3)",
            (&name, email.as_str(), password_hash.to_string()),
        )?;

        let id = UserID::new(connection.last_insert_rowid());

        Ok(User::new(id, name, email, password_hash, None))
    }

    /// Get the user with `id`.
    ///
    /// # Panics
    /// Panics if the database connection mutex is poisoned.
    fn get(&self, id: UserID) -> Result<User, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, email, password, avatar_url FROM user WHERE id = ?1")?
            .query_row((id.as_i64(),), SQLiteUserStore::map_row)
            .map_err(|error| error.into())
    }

    /// Get the user with `email`.
    ///
    /// # Panics
    /// Panics if the database connection mutex is poisoned.
    fn get_by_email(&self, email: &EmailAddress) -> Result<User, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, email, password, avatar_url FROM user WHERE email = ?1")?
            .query_row((email.as_str(),), SQLiteUserStore::map_row)
            .map_err(|error| error.into())
    }

    /// Set the avatar of the user with `id`.
    ///
    /// # Panics
    /// Panics if the database connection mutex is poisoned.
    fn set_avatar(&mut self, id: UserID, avatar_url: &str) -> Result<(), Error> {
        let rows_affected = self.connection.lock().unwrap().execute(
            "UPDATE user SET avatar_url = ?1 WHERE id = ?2",
            (avatar_url, id.as_i64()),
        )?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}

impl CreateTable for SQLiteUserStore {
    fn create_table(connection: &Connection) -> Result<(), Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS user (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL,
                avatar_url TEXT
            )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteUserStore {
    type ReturnType = User;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = UserID::new(row.get(offset)?);
        let name = row.get(offset + 1)?;
        let raw_email: String = row.get(offset + 2)?;
        let raw_password_hash = row.get(offset + 3)?;
        let avatar_url = row.get(offset + 4)?;

        let email = EmailAddress::from_str(&raw_email).map_err(|error| {
            rusqlite::Error::FromSqlConversionFailure(
                offset + 2,
                rusqlite::types::Type::Text,
                Box::new(error),
            )
        })?;

        let password_hash = PasswordHash::new_unchecked(raw_password_hash);

        Ok(User::new(id, name, email, password_hash, avatar_url))
    }
}
