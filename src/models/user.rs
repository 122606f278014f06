//! User models
//!
//! The users table stores the password exactly as given; hashing is owned
//! by the layer above (and, today, not done at all — schema constraint).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User account from the users table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    /// Unique user identifier
    pub id: i32,

    /// Display name shown in the UI
    pub name: String,

    /// User's email address (unique, matched case-insensitively)
    pub email: String,

    /// Stored password, never serialized outward
    #[serde(skip_serializing)]
    pub password: String,
}

/// Fields required to create a user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_not_serialized() {
        let user = User {
            id: 1,
            name: "Eva Stanley".to_string(),
            email: "sebastianguerra@ymail.com".to_string(),
            password: "password".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "sebastianguerra@ymail.com");
    }
}
