//! SQLite implementations of the store traits.
//!
//! Each store shares a single database connection behind a mutex. All queries
//! are single statements, so no multi-statement transactions are used.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

pub use category::SQLiteCategoryStore;
pub use transaction::SQLiteTransactionStore;
pub use user::SQLiteUserStore;

use crate::{db::initialize, AppState, Error};

mod category;
mod transaction;
mod user;

/// The concrete [AppState] used by the server binary and the HTTP tests.
pub type SQLAppState = AppState<SQLiteCategoryStore, SQLiteTransactionStore, SQLiteUserStore>;

/// Create the database tables and an [AppState] with SQLite backed stores
/// sharing `connection`.
///
/// # Errors
/// Returns an error if the database tables cannot be created.
pub fn create_app_state(connection: Connection, jwt_secret: &str) -> Result<SQLAppState, Error> {
    initialize(&connection)?;

    let connection = Arc::new(Mutex::new(connection));

    Ok(AppState::new(
        jwt_secret,
        SQLiteCategoryStore::new(connection.clone()),
        SQLiteTransactionStore::new(connection.clone()),
        SQLiteUserStore::new(connection),
    ))
}
