//! This file defines the route handler for registering new users.

use std::str::FromStr;

use axum::{extract::State, Json};
use email_address::EmailAddress;
use serde::Deserialize;

use crate::{
    auth::{issue_token, TokenResponse},
    models::{CategoryName, PasswordHash, TransactionType, DEFAULT_COST},
    routes::required_field,
    stores::{CategoryStore, TransactionStore, UserStore},
    AppState, Error,
};

/// The expense categories seeded for every new user.
pub const DEFAULT_EXPENSE_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Housing",
    "Entertainment",
    "Health",
    "Education",
    "Other",
];

/// The income categories seeded for every new user.
pub const DEFAULT_INCOME_CATEGORIES: [&str; 4] = ["Salary", "Freelance", "Investments", "Gifts"];

/// The request body for registering a new user.
#[derive(Debug, Deserialize)]
pub struct RegisterData {
    /// The display name of the new user.
    pub name: Option<String>,
    /// The email address of the new user.
    pub email: Option<String>,
    /// The plaintext password of the new user.
    pub password: Option<String>,
}

/// Create a new user with the default categories and issue an auth token.
pub async fn register_user<C, T, U>(
    State(mut state): State<AppState<C, T, U>>,
    Json(data): Json<RegisterData>,
) -> Result<Json<TokenResponse>, Error>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    let name = required_field(data.name, "name")?;
    let raw_email = required_field(data.email, "email")?;
    let password = required_field(data.password, "password")?;

    let email = EmailAddress::from_str(&raw_email).map_err(|_| Error::InvalidEmail(raw_email))?;
    let password_hash = PasswordHash::from_raw_password(&password, DEFAULT_COST)?;

    let user = state.user_store.create(name, email, password_hash)?;

    // Each category is a separate statement. If the server crashes partway
    // through, the user is left without some of their default categories.
    for name in DEFAULT_EXPENSE_CATEGORIES {
        state.category_store.create(
            user.id(),
            CategoryName::new_unchecked(name.to_string()),
            TransactionType::Expense,
            true,
        )?;
    }

    for name in DEFAULT_INCOME_CATEGORIES {
        state.category_store.create(
            user.id(),
            CategoryName::new_unchecked(name.to_string()),
            TransactionType::Income,
            true,
        )?;
    }

    let token = issue_token(&user, state.encoding_key())?;

    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod register_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        models::Category,
        routes::{
            endpoints,
            register::{DEFAULT_EXPENSE_CATEGORIES, DEFAULT_INCOME_CATEGORIES},
            test_utils::{new_test_server, register_test_user},
        },
    };

    #[tokio::test]
    async fn register_returns_token() {
        let server = new_test_server();

        let token = register_test_user(&server, "ada@example.com").await;

        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn register_seeds_default_categories() {
        let server = new_test_server();
        let token = register_test_user(&server, "ada@example.com").await;

        let response = server
            .get(endpoints::CATEGORIES)
            .authorization_bearer(token)
            .await;
        response.assert_status_ok();

        let categories = response.json::<Vec<Category>>();

        let expected_count = DEFAULT_EXPENSE_CATEGORIES.len() + DEFAULT_INCOME_CATEGORIES.len();
        assert_eq!(categories.len(), expected_count);
        assert!(categories.iter().all(|category| category.is_default));
        assert!(categories
            .iter()
            .any(|category| category.name.as_ref() == "Food"));
        assert!(categories
            .iter()
            .any(|category| category.name.as_ref() == "Salary"));
    }

    #[tokio::test]
    async fn register_with_missing_field_returns_bad_request() {
        let server = new_test_server();

        let response = server
            .post(endpoints::REGISTER)
            .json(&json!({
                "name": "Test User",
                "email": "ada@example.com",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_with_invalid_email_returns_bad_request() {
        let server = new_test_server();

        let response = server
            .post(endpoints::REGISTER)
            .json(&json!({
                "name": "Test User",
                "email": "not an email",
                "password": "averystrongpassword",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_with_duplicate_email_returns_conflict() {
        let server = new_test_server();
        register_test_user(&server, "ada@example.com").await;

        let response = server
            .post(endpoints::REGISTER)
            .json(&json!({
                "name": "Another User",
                "email": "ada@example.com",
                "password": "averystrongpassword",
            }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }
}
