//! This file defines the state shared between route handlers.

use axum::extract::FromRef;
use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::stores::{CategoryStore, TransactionStore, UserStore};

/// The state shared between the route handlers.
#[derive(Clone)]
pub struct AppState<C, T, U>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    /// The key used to sign auth tokens.
    encoding_key: EncodingKey,
    /// The key used to verify auth tokens.
    decoding_key: DecodingKey,
    /// The store for transaction categories.
    pub category_store: C,
    /// The store for transactions.
    pub transaction_store: T,
    /// The store for users.
    pub user_store: U,
}

impl<C, T, U> AppState<C, T, U>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    /// Create the application state, deriving the token keys from
    /// `jwt_secret`.
    pub fn new(jwt_secret: &str, category_store: C, transaction_store: T, user_store: U) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            category_store,
            transaction_store,
            user_store,
        }
    }

    /// The key used to sign auth tokens.
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }
}

/// The state needed to verify auth tokens.
///
/// This is extracted from [AppState] via [FromRef] so that the token
/// extractor does not need to know about the store types.
#[derive(Clone)]
pub struct AuthState {
    /// The key used to verify auth tokens.
    pub decoding_key: DecodingKey,
}

impl<C, T, U> FromRef<AppState<C, T, U>> for AuthState
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<C, T, U>) -> Self {
        Self {
            decoding_key: state.decoding_key.clone(),
        }
    }
}
