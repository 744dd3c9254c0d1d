//! # HTTP client for the remote user service
//!
//! [`ApiClient`] is a thin wrapper over [`reqwest::Client`]. It owns the base
//! URL, an optional bearer token, and one method per remote operation:
//!
//! | Method | Route |
//! |--------|-------|
//! | [`list_users`](ApiClient::list_users) | `GET /users?_page=&_limit=` |
//! | [`search_users`](ApiClient::search_users) | `GET /users?q=&_page=&_limit=` |
//! | [`create_user`](ApiClient::create_user) | `POST /users` |
//! | [`update_user`](ApiClient::update_user) | `PUT /users/:id` |
//! | [`delete_user`](ApiClient::delete_user) | `DELETE /users/:id` |
//! | [`login`](ApiClient::login) | `POST /auth/login` |
//! | [`signup`](ApiClient::signup) | `POST /auth/signup` |
//!
//! Mutating calls attach `Authorization: Bearer <token>` whenever the client
//! holds a token; the client forwards what it has and enforces no
//! authorization itself. No retries, no timeouts, no cancellation — a request
//! that was issued runs to completion and its caller decides what to show.

use reqwest::RequestBuilder;

use store::{AppConfig, User};

use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, NewUser, SignupRequest, UserUpdate};

/// Client for the remote REST service.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    /// Set or clear the bearer token attached to mutating calls.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("request to {} returned {status}", response.url());
            return Err(ApiError::Status(status));
        }
        Ok(response)
    }

    /// Fetch one page of users in server order.
    pub async fn list_users(&self, page: u32, limit: u32) -> Result<Vec<User>, ApiError> {
        let response = Self::send(
            self.http
                .get(self.url("/users"))
                .query(&[("_page", page.to_string()), ("_limit", limit.to_string())]),
        )
        .await?;
        Ok(response.json().await?)
    }

    /// Fetch one page of users matching `term`. Match semantics are owned by
    /// the server.
    pub async fn search_users(
        &self,
        term: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<User>, ApiError> {
        let response = Self::send(self.http.get(self.url("/users")).query(&[
            ("q", term.to_string()),
            ("_page", page.to_string()),
            ("_limit", limit.to_string()),
        ]))
        .await?;
        Ok(response.json().await?)
    }

    /// Create a user; the server assigns the id.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<User, ApiError> {
        let response =
            Self::send(self.authorize(self.http.post(self.url("/users")).json(new_user))).await?;
        Ok(response.json().await?)
    }

    /// Replace a user record wholesale.
    pub async fn update_user(&self, update: &UserUpdate) -> Result<User, ApiError> {
        let response = Self::send(
            self.authorize(
                self.http
                    .put(self.url(&format!("/users/{}", update.id)))
                    .json(update),
            ),
        )
        .await?;
        Ok(response.json().await?)
    }

    /// Delete a user. Success carries no body.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        Self::send(self.authorize(self.http.delete(self.url(&format!("/users/{id}"))))).await?;
        Ok(())
    }

    /// Exchange credentials for a token and profile snapshot.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response = Self::send(self.http.post(self.url("/auth/login")).json(request)).await?;
        Ok(response.json().await?)
    }

    /// Register an account; duplicate username/email policy is the server's.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        let response = Self::send(self.http.post(self.url("/auth/signup")).json(request)).await?;
        Ok(response.json().await?)
    }
}
