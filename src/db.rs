//! This file defines traits for creating database tables and converting table
//! rows to domain types, and the function for initializing the application
//! database.

use rusqlite::{Connection, Row};

use crate::{
    stores::sqlite::{SQLiteCategoryStore, SQLiteTransactionStore, SQLiteUserStore},
    Error,
};

/// Create the table for a store's domain type in a SQLite database.
pub trait CreateTable {
    /// Create the table.
    ///
    /// # Errors
    /// Returns an error if the table cannot be created, e.g. due to invalid
    /// SQL, or if there is an error communicating with the database.
    fn create_table(connection: &Connection) -> Result<(), Error>;
}

/// Convert a database row into a domain type.
pub trait MapRow {
    /// The type the row is converted into.
    type ReturnType;

    /// Convert `row` into `ReturnType`, starting at the first column.
    ///
    /// # Errors
    /// Returns an error if a column contains an unexpected type or is missing.
    fn map_row(row: &Row) -> Result<Self::ReturnType, rusqlite::Error> {
        Self::map_row_with_offset(row, 0)
    }

    /// Convert `row` into `ReturnType`, starting at the column `offset`.
    ///
    /// # Errors
    /// Returns an error if a column contains an unexpected type or is missing.
    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error>;
}

/// Create the tables for the application.
///
/// Foreign keys are switched on so that deleting a category also deletes its
/// transactions.
///
/// # Errors
/// Returns an error if the tables cannot be created or if there is an error
/// communicating with the database.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.execute("PRAGMA foreign_keys = ON", ())?;

    SQLiteUserStore::create_table(connection)?;
    SQLiteCategoryStore::create_table(connection)?;
    SQLiteTransactionStore::create_table(connection)?;

    Ok(())
}

#[cfg(test)]
mod initialize_tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn creates_all_tables() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).unwrap();

        let table_count: i64 = connection
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('user', 'category', 'transaction')",
                (),
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(table_count, 3);
    }

    #[test]
    fn enables_foreign_keys() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).unwrap();

        let foreign_keys: i64 = connection
            .query_row("PRAGMA foreign_keys", (), |row| row.get(0))
            .unwrap();

        assert_eq!(foreign_keys, 1);
    }
}
