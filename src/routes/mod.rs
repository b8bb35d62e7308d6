//! This module defines the HTTP routes of the API and builds the application
//! router.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    stores::{CategoryStore, TransactionStore, UserStore},
    AppState, Error,
};

pub mod endpoints;

mod analytics;
mod category;
mod log_in;
mod public;
mod register;
mod transaction;
mod user;

/// Create the router for the API.
pub fn build_router<C, T, U>(state: AppState<C, T, U>) -> Router
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    T: TransactionStore + Clone + Send + Sync + 'static,
    U: UserStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::REGISTER, post(register::register_user))
        .route(endpoints::LOG_IN, post(log_in::log_in))
        .route(endpoints::ME, get(user::get_profile))
        .route(endpoints::ME_AVATAR, patch(user::update_avatar))
        .route(endpoints::PUBLIC_PROFILE, get(public::get_public_snapshot))
        .route(
            endpoints::CATEGORIES,
            get(category::get_categories).post(category::create_category),
        )
        .route(endpoints::CATEGORY, delete(category::delete_category))
        .route(
            endpoints::TRANSACTIONS,
            get(transaction::get_transactions)
                .post(transaction::create_transaction)
                .delete(transaction::clear_transactions),
        )
        .route(endpoints::TRANSACTION, delete(transaction::delete_transaction))
        .route(endpoints::SUMMARY, get(analytics::get_summary))
        .route(endpoints::DAILY_SERIES, get(analytics::get_daily_series))
        .with_state(state)
}

/// The response body for routes that acknowledge an action without returning
/// data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    /// Always true.
    pub success: bool,
}

impl Default for Ack {
    fn default() -> Self {
        Self { success: true }
    }
}

/// Unwrap a request body field, treating an absent or empty string as
/// missing.
pub(crate) fn required_field(value: Option<String>, name: &'static str) -> Result<String, Error> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingField(name)),
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{auth::TokenResponse, build_router, stores::sqlite::create_app_state};

    use super::endpoints;

    /// Create a test server backed by an in-memory database.
    pub fn new_test_server() -> TestServer {
        let connection = Connection::open_in_memory().unwrap();
        let state = create_app_state(connection, "test secret").unwrap();

        TestServer::new(build_router(state)).unwrap()
    }

    /// Register a user and return their auth token.
    pub async fn register_test_user(server: &TestServer, email: &str) -> String {
        let response = server
            .post(endpoints::REGISTER)
            .json(&json!({
                "name": "Test User",
                "email": email,
                "password": "averystrongpassword",
            }))
            .await;

        response.assert_status_ok();

        response.json::<TokenResponse>().token
    }
}

#[cfg(test)]
mod required_field_tests {
    use crate::Error;

    use super::required_field;

    #[test]
    fn accepts_non_empty_value() {
        let result = required_field(Some("value".to_string()), "field");

        assert_eq!(result, Ok("value".to_string()));
    }

    #[test]
    fn rejects_missing_value() {
        let result = required_field(None, "field");

        assert_eq!(result, Err(Error::MissingField("field")));
    }

    #[test]
    fn rejects_blank_value() {
        let result = required_field(Some("  ".to_string()), "field");

        assert_eq!(result, Err(Error::MissingField("field")));
    }
}
