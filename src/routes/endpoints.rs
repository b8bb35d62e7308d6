//! The API endpoint URIs.

/// The route for registering new users.
pub const REGISTER: &str = "/api/register";
/// The route for logging in a user.
pub const LOG_IN: &str = "/api/login";
/// The route for the authenticated user's profile.
pub const ME: &str = "/api/me";
/// The route for updating the authenticated user's avatar.
pub const ME_AVATAR: &str = "/api/me/avatar";
/// The route for the unauthenticated snapshot of a user's data.
pub const PUBLIC_PROFILE: &str = "/api/public/:user_id";
/// The route to access the authenticated user's categories.
pub const CATEGORIES: &str = "/api/categories";
/// The route to access a single category.
pub const CATEGORY: &str = "/api/categories/:category_id";
/// The route to access the authenticated user's transactions.
pub const TRANSACTIONS: &str = "/api/expenses";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/api/expenses/:transaction_id";
/// The route for the period summary of the authenticated user's transactions.
pub const SUMMARY: &str = "/api/summary";
/// The route for the daily activity series.
pub const DAILY_SERIES: &str = "/api/analytics/daily";

// These tests are here so that we know the routes will be accepted by the router.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::routes::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::REGISTER);
        assert_endpoint_is_valid_uri(endpoints::LOG_IN);
        assert_endpoint_is_valid_uri(endpoints::ME);
        assert_endpoint_is_valid_uri(endpoints::ME_AVATAR);
        assert_endpoint_is_valid_uri(endpoints::PUBLIC_PROFILE);
        assert_endpoint_is_valid_uri(endpoints::CATEGORIES);
        assert_endpoint_is_valid_uri(endpoints::CATEGORY);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::SUMMARY);
        assert_endpoint_is_valid_uri(endpoints::DAILY_SERIES);
    }
}
