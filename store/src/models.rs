//! # User model
//!
//! [`User`] is the single shared entity of the application: the record managed
//! by the users table and the cached profile held inside a [`crate::Session`].
//!
//! - `id` — server-assigned integer, immutable after creation.
//! - `name`, `username`, `email`, `telephone`, `location` — free-form strings;
//!   non-emptiness and format are enforced by the form validation layer, not
//!   here.
//! - `is_admin` — boolean flag, serialized as `isAdmin` on the wire and in the
//!   persisted session blob. Read from locally cached data and never
//!   re-verified against the server.

use serde::{Deserialize, Serialize};

/// A user record as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub telephone: String,
    pub location: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_uses_is_admin_camel_case() {
        let raw = r#"{
            "id": 1,
            "name": "Mick",
            "username": "mick",
            "email": "mick@example.com",
            "telephone": "0123456789",
            "location": "Lagos",
            "isAdmin": true
        }"#;

        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, 1);
        assert!(user.is_admin);

        let out = serde_json::to_string(&user).unwrap();
        assert!(out.contains("\"isAdmin\":true"));
        assert!(!out.contains("is_admin"));
    }
}
