//! This file defines the route handler for logging in users.

use std::str::FromStr;

use axum::{extract::State, Json};
use email_address::EmailAddress;
use serde::Deserialize;

use crate::{
    auth::{issue_token, TokenResponse},
    routes::required_field,
    stores::{CategoryStore, TransactionStore, UserStore},
    AppState, Error,
};

/// The request body for logging in.
#[derive(Debug, Deserialize)]
pub struct LogInData {
    /// The email address of the user logging in.
    pub email: Option<String>,
    /// The plaintext password of the user logging in.
    pub password: Option<String>,
}

/// Verify the user's credentials and issue an auth token.
///
/// An unknown email and a wrong password both produce the same 401 response
/// so that the endpoint does not reveal which emails are registered.
pub async fn log_in<C, T, U>(
    State(state): State<AppState<C, T, U>>,
    Json(data): Json<LogInData>,
) -> Result<Json<TokenResponse>, Error>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    let raw_email = required_field(data.email, "email")?;
    let password = required_field(data.password, "password")?;

    let email =
        EmailAddress::from_str(&raw_email).map_err(|_| Error::InvalidCredentials)?;

    let user = state.user_store.get_by_email(&email).map_err(|error| match error {
        Error::NotFound => Error::InvalidCredentials,
        error => error,
    })?;

    let password_matches = user
        .password_hash()
        .verify(&password)
        .map_err(|error| Error::HashingError(error.to_string()))?;

    if !password_matches {
        return Err(Error::InvalidCredentials);
    }

    let token = issue_token(&user, state.encoding_key())?;

    Ok(Json(TokenResponse { token }))
}
