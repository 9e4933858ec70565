use std::fmt::{Debug, Formatter};

use crate::{AppError, AppResult, NonEmptyString};

/// Per-request API key for the upstream Provider.
///
/// Extracted from the inbound request and threaded as an explicit argument
/// into every Provider call for that request's duration. Never stored in
/// process-wide state, so one request's key can never leak into another.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredential(NonEmptyString);

impl ProviderCredential {
    /// Creates a credential from a header value.
    ///
    /// An absent or blank key means every upstream call for this request
    /// would be rejected, so it is refused up front.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = NonEmptyString::new(value).map_err(|_| {
            AppError::CredentialMissing("Kit API key is required for this request".to_owned())
        })?;

        Ok(Self(value))
    }

    /// Returns the raw key for use in an upstream request header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

// Keys must never end up in logs through derived formatting.
impl Debug for ProviderCredential {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("ProviderCredential(<redacted>)")
    }
}
