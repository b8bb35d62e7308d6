//! This file defines the JWT auth tokens used to authenticate API requests,
//! and an extractor for requiring a valid token in route handlers.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    RequestPartsExt,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    models::{User, UserID},
    AuthState, Error,
};

/// How long an auth token stays valid for.
pub const TOKEN_DURATION_DAYS: i64 = 7;

/// The claims stored in an auth token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// The ID of the authenticated user.
    pub sub: UserID,
    /// The email of the authenticated user.
    pub email: String,
    /// The unix timestamp the token was issued at.
    pub iat: usize,
    /// The unix timestamp the token expires at.
    pub exp: usize,
}

/// The response body for routes that issue an auth token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed auth token.
    pub token: String,
}

/// Create a signed auth token for `user` that expires in
/// [TOKEN_DURATION_DAYS] days.
///
/// # Errors
/// Returns [Error::TokenCreation] if the token could not be signed.
pub fn issue_token(user: &User, encoding_key: &EncodingKey) -> Result<String, Error> {
    let now = Utc::now();
    let expires_at = now + Duration::days(TOKEN_DURATION_DAYS);

    let claims = Claims {
        sub: user.id(),
        email: user.email().to_string(),
        iat: now.timestamp() as usize,
        exp: expires_at.timestamp() as usize,
    };

    jsonwebtoken::encode(&Header::default(), &claims, encoding_key).map_err(|error| {
        tracing::error!("failed to create an auth token: {}", error);
        Error::TokenCreation
    })
}

/// Decode and verify an auth token.
///
/// # Errors
/// Returns [Error::InvalidToken] if the token is malformed, has an invalid
/// signature, or has expired.
pub fn decode_token(token: &str, decoding_key: &DecodingKey) -> Result<Claims, Error> {
    jsonwebtoken::decode::<Claims>(token, decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|_| Error::InvalidToken)
}

#[async_trait]
impl<S> FromRequestParts<S> for Claims
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| Error::InvalidToken)?;

        let auth_state = AuthState::from_ref(state);

        decode_token(bearer.token(), &auth_state.decoding_key)
    }
}
