use std::sync::Arc;

use kitrelay_core::{AppError, AppResult, ProviderCredential};
use kitrelay_domain::Tag;

use crate::ProviderClient;

/// Application service for listing the Provider's tags.
#[derive(Clone)]
pub struct TagService {
    provider: Arc<dyn ProviderClient>,
}

impl TagService {
    /// Creates a new tag service.
    #[must_use]
    pub fn new(provider: Arc<dyn ProviderClient>) -> Self {
        Self { provider }
    }

    /// Returns all tags available to the account behind the credential.
    pub async fn list_tags(&self, credential: &ProviderCredential) -> AppResult<Vec<Tag>> {
        self.provider
            .list_tags(credential)
            .await?
            .ok_or_else(|| AppError::UpstreamCallFailed("no response from the Kit API".to_owned()))
    }
}
