//! Defines the app level error type and its mapping to JSON error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field was missing or empty in a request body.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// An empty string was used to create a category name.
    #[error("category name cannot be empty")]
    EmptyCategoryName,

    /// The string used to register a user could not be parsed as an email
    /// address.
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    /// A zero, negative, or non-finite amount was used to create a
    /// transaction.
    #[error("the amount must be a positive number")]
    InvalidAmount,

    /// The category used to create a transaction has a different type than
    /// the transaction.
    #[error("the category type does not match the transaction type")]
    CategoryTypeMismatch,

    /// The client tried to delete one of the categories seeded at
    /// registration.
    #[error("default categories cannot be deleted")]
    DefaultCategory,

    /// The user provided an invalid combination of email and password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The bearer token is missing, malformed, or expired.
    #[error("invalid or expired token")]
    InvalidToken,

    /// The email used to register is already in use. The client should try
    /// again with a different email address.
    #[error("the email is already registered")]
    DuplicateEmail,

    /// A category with the same name (ignoring case) and type already exists
    /// for this user.
    #[error("the category already exists")]
    DuplicateCategory,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    /// When communicating with the application client this error is replaced
    /// with a generic internal server error.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// An auth token could not be created.
    #[error("could not create an auth token")]
    TokenCreation,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("user.email") =>
            {
                Error::DuplicateEmail
            }
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("category") =>
            {
                Error::DuplicateCategory
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::MissingField(_)
            | Error::EmptyCategoryName
            | Error::InvalidEmail(_)
            | Error::InvalidAmount
            | Error::CategoryTypeMismatch
            | Error::DefaultCategory => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::InvalidCredentials | Error::InvalidToken => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            Error::DuplicateEmail | Error::DuplicateCategory => {
                (StatusCode::CONFLICT, self.to_string())
            }
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
