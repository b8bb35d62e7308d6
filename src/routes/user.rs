//! This file defines the route handlers for the authenticated user's profile.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{
    auth::Claims,
    models::UserProfile,
    routes::{required_field, Ack},
    stores::{CategoryStore, TransactionStore, UserStore},
    AppState, Error,
};

/// The request body for updating the user's avatar.
#[derive(Debug, Deserialize)]
pub struct AvatarData {
    /// The new avatar as a data URL.
    pub avatar: Option<String>,
}

/// Get the profile of the authenticated user.
pub async fn get_profile<C, T, U>(
    State(state): State<AppState<C, T, U>>,
    claims: Claims,
) -> Result<Json<UserProfile>, Error>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    let user = state.user_store.get(claims.sub)?;

    Ok(Json(user.profile()))
}

/// Set the avatar of the authenticated user.
pub async fn update_avatar<C, T, U>(
    State(mut state): State<AppState<C, T, U>>,
    claims: Claims,
    Json(data): Json<AvatarData>,
) -> Result<Json<Ack>, Error>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    let avatar = required_field(data.avatar, "avatar")?;

    state.user_store.set_avatar(claims.sub, &avatar)?;

    Ok(Json(Ack::default()))
}

#[cfg(test)]
mod profile_tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::{
        models::UserProfile,
        routes::{
            endpoints,
            test_utils::{new_test_server, register_test_user},
        },
    };

    #[tokio::test]
    async fn get_profile_returns_user_without_password() {
        let server = new_test_server();
        let token = register_test_user(&server, "ada@example.com").await;

        let response = server.get(endpoints::ME).authorization_bearer(token).await;
        response.assert_status_ok();

        let json = response.json::<Value>();
        assert_eq!(json.get("email").unwrap(), "ada@example.com");
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn get_profile_without_token_returns_unauthorized() {
        let server = new_test_server();

        let response = server.get(endpoints::ME).await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn get_profile_with_invalid_token_returns_unauthorized() {
        let server = new_test_server();

        let response = server
            .get(endpoints::ME)
            .authorization_bearer("not a real token")
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn update_avatar_is_visible_in_profile() {
        let server = new_test_server();
        let token = register_test_user(&server, "ada@example.com").await;

        let response = server
            .patch(endpoints::ME_AVATAR)
            .authorization_bearer(token.clone())
            .json(&json!({"avatar": "data:image/png;base64,AAAA"}))
            .await;
        response.assert_status_ok();

        let profile = server
            .get(endpoints::ME)
            .authorization_bearer(token)
            .await
            .json::<UserProfile>();

        assert_eq!(
            profile.avatar_url,
            Some("data:image/png;base64,AAAA".to_string())
        );
    }

    #[tokio::test]
    async fn update_avatar_with_missing_field_returns_bad_request() {
        let server = new_test_server();
        let token = register_test_user(&server, "ada@example.com").await;

        let response = server
            .patch(endpoints::ME_AVATAR)
            .authorization_bearer(token)
            .json(&json!({}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
