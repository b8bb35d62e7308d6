//! The SQLite implementation of [TransactionStore].

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    db::{CreateTable, MapRow},
    models::{DatabaseID, NewTransaction, Transaction, UserID},
    stores::TransactionStore,
    Error,
};

/// Stores transactions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store that uses the given database connection.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a new transaction.
    ///
    /// # Panics
    /// Panics if the database connection mutex is poisoned.
    fn create(&mut self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "INSERT INTO \"transaction\" (user_id, category_id, title, amount, date, kind)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            (
                transaction.user_id.as_i64(),
                transaction.category_id,
                &transaction.title,
                transaction.amount,
                transaction.date,
                transaction.kind,
            ),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Transaction {
            id,
            user_id: transaction.user_id,
            category_id: transaction.category_id,
            title: transaction.title,
            amount: transaction.amount,
            date: transaction.date,
            kind: transaction.kind,
        })
    }

    /// Get the transactions of a user, newest first.
    ///
    /// # Panics
    /// Panics if the database connection mutex is poisoned.
    fn get_by_user(&self, user_id: UserID) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, user_id, category_id, title, amount, date, kind FROM \"transaction\"
                WHERE user_id = ?1 ORDER BY date DESC, id DESC",
            )?
            .query_map((user_id.as_i64(),), SQLiteTransactionStore::map_row)?
            .map(|transaction| transaction.map_err(|error| error.into()))
            .collect()
    }

    /// Delete a user's transaction.
    ///
    /// # Panics
    /// Panics if the database connection mutex is poisoned.
    fn delete(&mut self, id: DatabaseID, user_id: UserID) -> Result<(), Error> {
        let rows_affected = self.connection.lock().unwrap().execute(
            "DELETE FROM \"transaction\" WHERE id = ?1 AND user_id = ?2",
            (id, user_id.as_i64()),
        )?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    /// Delete all of a user's transactions.
    ///
    /// # Panics
    /// Panics if the database connection mutex is poisoned.
    fn delete_by_user(&mut self, user_id: UserID) -> Result<(), Error> {
        self.connection.lock().unwrap().execute(
            "DELETE FROM \"transaction\" WHERE user_id = ?1",
            (user_id.as_i64(),),
        )?;

        Ok(())
    }
}

impl CreateTable for SQLiteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY,
                user_id INTEGER NOT NULL,
                category_id INTEGER NOT NULL,
                title TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                kind TEXT NOT NULL,
                FOREIGN KEY(user_id) REFERENCES user(id) ON DELETE CASCADE,
                FOREIGN KEY(category_id) REFERENCES category(id) ON DELETE CASCADE
            )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteTransactionStore {
    type ReturnType = Transaction;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Transaction {
            id: row.get(offset)?,
            user_id: UserID::new(row.get(offset + 1)?),
            category_id: row.get(offset + 2)?,
            title: row.get(offset + 3)?,
            amount: row.get(offset + 4)?,
            date: row.get(offset + 5)?,
            kind: row.get(offset + 6)?,
        })
    }
}
