//! Request and response payloads for the remote API.
//!
//! The shared [`User`](store::User) entity lives in the `store` crate; the
//! types here exist only to cross the wire. Field names follow the server's
//! JSON convention (`isAdmin`).

use serde::{Deserialize, Serialize};

use store::User;

/// Body of `POST /users`. The server assigns the id; `is_admin` is defaulted
/// to `false` for self-service creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub telephone: String,
    pub location: String,
    pub password: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// Body of `PUT /users/:id` — full replacement semantics, so the immutable
/// `id` and the existing `is_admin` flag are echoed back alongside the
/// editable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub telephone: String,
    pub location: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/signup`. Uniqueness of username/email is policy owned
/// by the server; a conflict comes back as a request failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub telephone: String,
    pub location: String,
    pub password: String,
}

/// Successful response of both auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}
