use thiserror::Error;

/// A failed request to the remote API.
///
/// Request failures are deliberately coarse: the UI surfaces every variant as
/// the same generic notification and never retries, so no 4xx/5xx distinction
/// is carried beyond the status code itself. Validation failures never become
/// an `ApiError` — they are caught before a request is issued.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connection, TLS, or body decode failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}
