//! This file defines the user type, its ID type, and the profile views that
//! the API exposes.

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

use crate::models::PasswordHash;

/// The integer ID of a [User].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserID(i64);

impl UserID {
    /// Create a new user ID.
    ///
    /// Note that this does not create a new user in the application's database.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// The underlying integer ID.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// A user of the application.
///
/// New users are created at registration via a [UserStore](crate::stores::UserStore).
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserID,
    name: String,
    email: EmailAddress,
    password_hash: PasswordHash,
    avatar_url: Option<String>,
}

impl User {
    /// Create a user.
    ///
    /// Note that this does not add the user to any database, this must be done separately.
    pub fn new(
        id: UserID,
        name: String,
        email: EmailAddress,
        password_hash: PasswordHash,
        avatar_url: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            avatar_url,
        }
    }

    /// The ID of the user.
    pub fn id(&self) -> UserID {
        self.id
    }

    /// The email address of the user.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// The hashed password of the user.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// The avatar of the user as a data URL, if one has been set.
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// The view of the user returned to the account owner.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.to_string(),
            avatar_url: self.avatar_url.clone(),
        }
    }

    /// The view of the user exposed on the public, unauthenticated snapshot.
    ///
    /// This view must not include the email address.
    pub fn public_profile(&self) -> PublicProfile {
        PublicProfile {
            id: self.id,
            name: self.name.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

/// The account owner's view of a [User]. Never includes the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The ID of the user.
    pub id: UserID,
    /// The display name of the user.
    pub name: String,
    /// The email address of the user.
    pub email: String,
    /// The avatar of the user as a data URL, if one has been set.
    pub avatar_url: Option<String>,
}

/// The unauthenticated view of a [User]. Includes neither the email address
/// nor the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicProfile {
    /// The ID of the user.
    pub id: UserID,
    /// The display name of the user.
    pub name: String,
    /// The avatar of the user as a data URL, if one has been set.
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod user_tests {
    use std::str::FromStr;

    use email_address::EmailAddress;

    use crate::models::PasswordHash;

    use super::{User, UserID};

    fn test_user() -> User {
        User::new(
            UserID::new(1),
            "Ada".to_string(),
            EmailAddress::from_str("ada@example.com").unwrap(),
            PasswordHash::new_unchecked("hunter2".to_string()),
            None,
        )
    }

    #[test]
    fn profile_includes_email() {
        let profile = test_user().profile();

        assert_eq!(profile.email, "ada@example.com");
    }

    #[test]
    fn public_profile_serializes_without_email() {
        let json = serde_json::to_value(test_user().public_profile()).unwrap();

        assert!(json.get("email").is_none());
        assert_eq!(json.get("name").unwrap(), "Ada");
    }
}
