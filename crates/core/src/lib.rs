//! Shared primitives for all Rust crates in Kitrelay.

#![forbid(unsafe_code)]

/// Per-request Provider credential handling.
pub mod credential;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use credential::ProviderCredential;

/// Result type used across Kitrelay crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// No per-request Provider credential was supplied.
    #[error("credential missing: {0}")]
    CredentialMissing(String),

    /// The Provider returned no response at all.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// A call to the Provider failed at the transport or HTTP level.
    #[error("upstream call failed: {0}")]
    UpstreamCallFailed(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}
