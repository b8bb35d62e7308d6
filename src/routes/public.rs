//! This file defines the unauthenticated route handler for the read-only
//! snapshot of a user's data.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::{
    models::{Category, PublicProfile, Transaction, UserID},
    stores::{CategoryStore, TransactionStore, UserStore},
    AppState, Error,
};

/// The read-only snapshot of a user's data, for sharing via a public link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicSnapshot {
    /// The user the snapshot belongs to, without their email.
    pub user: PublicProfile,
    /// The user's categories.
    pub categories: Vec<Category>,
    /// The user's transactions, newest first.
    pub expenses: Vec<Transaction>,
}

/// Get the public snapshot of the user with `user_id`. Requires no auth.
pub async fn get_public_snapshot<C, T, U>(
    State(state): State<AppState<C, T, U>>,
    Path(user_id): Path<i64>,
) -> Result<Json<PublicSnapshot>, Error>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    let user_id = UserID::new(user_id);

    let user = state.user_store.get(user_id)?;
    let categories = state.category_store.get_by_user(user_id)?;
    let expenses = state.transaction_store.get_by_user(user_id)?;

    Ok(Json(PublicSnapshot {
        user: user.public_profile(),
        categories,
        expenses,
    }))
}

#[cfg(test)]
mod public_snapshot_tests {
    use axum::http::StatusCode;
    use serde_json::Value;

    use crate::routes::test_utils::{new_test_server, register_test_user};

    #[tokio::test]
    async fn snapshot_is_available_without_a_token() {
        let server = new_test_server();
        register_test_user(&server, "ada@example.com").await;

        let response = server.get("/api/public/1").await;

        response.assert_status_ok();
    }

    #[tokio::test]
    async fn snapshot_omits_the_email() {
        let server = new_test_server();
        register_test_user(&server, "ada@example.com").await;

        let json = server.get("/api/public/1").await.json::<Value>();

        let user = json.get("user").unwrap();
        assert!(user.get("email").is_none());
        assert_eq!(user.get("name").unwrap(), "Test User");
        assert!(json.get("categories").unwrap().as_array().is_some());
        assert!(json.get("expenses").unwrap().as_array().is_some());
    }

    #[tokio::test]
    async fn snapshot_for_unknown_user_returns_not_found() {
        let server = new_test_server();

        let response = server.get("/api/public/42").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
