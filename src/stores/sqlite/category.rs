//! The SQLite implementation of [CategoryStore].

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    db::{CreateTable, MapRow},
    models::{Category, CategoryName, DatabaseID, TransactionType, UserID},
    stores::CategoryStore,
    Error,
};

/// Stores transaction categories in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new store that uses the given database connection.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CategoryStore for SQLiteCategoryStore {
    /// Create a new category.
    ///
    /// # Panics
    /// Panics if the database connection mutex is poisoned.
    fn create(
        &mut self,
        user_id: UserID,
        name: CategoryName,
        kind: TransactionType,
        is_default: bool,
    ) -> Result<Category, Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "INSERT INTO category (user_id, name, kind, is_default) VALUES (?1, ?2, ?3, ?4)",
            (user_id.as_i64(), name.as_ref(), kind, is_default),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Category {
            id,
            user_id,
            name,
            kind,
            is_default,
        })
    }

    /// Get the category with `id`.
    ///
    /// # Panics
    /// Panics if the database connection mutex is poisoned.
    fn get(&self, id: DatabaseID) -> Result<Category, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, user_id, name, kind, is_default FROM category WHERE id = ?1")?
            .query_row((id,), SQLiteCategoryStore::map_row)
            .map_err(|error| error.into())
    }

    /// Get the categories of a user in creation order.
    ///
    /// # Panics
    /// Panics if the database connection mutex is poisoned.
    fn get_by_user(&self, user_id: UserID) -> Result<Vec<Category>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, user_id, name, kind, is_default FROM category
                WHERE user_id = ?1 ORDER BY id ASC",
            )?
            .query_map((user_id.as_i64(),), SQLiteCategoryStore::map_row)?
            .map(|category| category.map_err(|error| error.into()))
            .collect()
    }

    /// Delete a user's category along with its transactions.
    ///
    /// # Panics
    /// Panics if the database connection mutex is poisoned.
    fn delete(&mut self, id: DatabaseID, user_id: UserID) -> Result<(), Error> {
        let category = self.get(id)?;

        if category.user_id != user_id {
            return Err(Error::NotFound);
        }

        if category.is_default {
            return Err(Error::DefaultCategory);
        }

        // The foreign key cascade deletes the category's transactions.
        self.connection
            .lock()
            .unwrap()
            .execute("DELETE FROM category WHERE id = ?1", (id,))?;

        Ok(())
    }
}

impl CreateTable for SQLiteCategoryStore {
    fn create_table(connection: &Connection) -> Result<(), Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS category (
                id INTEGER PRIMARY KEY,
                user_id INTEGER NOT NULL,
                name TEXT NOT NULL COLLATE NOCASE,
                kind TEXT NOT NULL,
                is_default INTEGER NOT NULL DEFAULT 0,
                UNIQUE(user_id, kind, name),
                FOREIGN KEY(user_id) REFERENCES user(id) ON DELETE CASCADE
            )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteCategoryStore {
    type ReturnType = Category;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Category {
            id: row.get(offset)?,
            user_id: UserID::new(row.get(offset + 1)?),
            name: CategoryName::new_unchecked(row.get(offset + 2)?),
            kind: row.get(offset + 3)?,
            is_default: row.get(offset + 4)?,
        })
    }
}
