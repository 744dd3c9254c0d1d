//! # API crate — HTTP client and form validation for UserMick
//!
//! Everything the UI needs to talk to the remote REST service, and nothing
//! else: no rendering, no persistence (that lives in `store`).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — reqwest wrapper over every remote operation, attaching the bearer token it holds to mutating calls |
//! | [`error`] | [`ApiError`] — request failures (network vs. non-2xx status), distinct from validation errors |
//! | [`forms`] | Declarative per-form validation returning typed payloads or field→message mappings |
//! | [`models`] | Request/response payload types ([`NewUser`], [`UserUpdate`], [`LoginRequest`], [`SignupRequest`], [`AuthResponse`]) |
//!
//! The shared [`User`] entity and [`AppConfig`] are defined in the `store`
//! crate and re-exported here.

pub mod client;
pub mod error;
pub mod forms;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use forms::{FieldErrors, SignInForm, SignUpForm, UserEditForm, UserForm};
pub use models::{AuthResponse, LoginRequest, NewUser, SignupRequest, UserUpdate};

pub use store::{AppConfig, User};
