use async_trait::async_trait;

use kitrelay_core::{AppResult, ProviderCredential};
use kitrelay_domain::{SubscriberEmail, Tag, TagId};

/// One page of the Provider's subscriber listing.
///
/// Produced by a single upstream call and merged into the caller's
/// accumulator; the cursor it carries is consumed by the next call and then
/// discarded, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberPage {
    /// Subscriber emails on this page. An absent list on the wire maps to
    /// an empty vector.
    pub emails: Vec<SubscriberEmail>,
    /// Opaque resume token for the next page. The Provider returns one even
    /// past the last real page, so absence or emptiness both mean "stop".
    pub end_cursor: Option<String>,
}

/// Raw outcome of one tag-association call.
///
/// Every HTTP status the Provider answers with is carried in-band; only
/// transport-level failures surface as errors from the port.
#[derive(Debug, Clone)]
pub struct TagSubscriberResponse {
    /// Upstream HTTP status code.
    pub status_code: u16,
    /// Raw upstream response body.
    pub body: String,
}

/// Client port for the upstream marketing Provider.
///
/// Each method performs exactly one logical upstream call. The per-request
/// credential is an explicit argument so no ambient state can leak a key
/// across requests.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Fetches one page of subscribers, resuming at `cursor` when given.
    ///
    /// `Ok(None)` means the Provider returned no parseable body at all,
    /// which callers treat differently on the first page (hard error) than
    /// mid-pagination (stop).
    async fn list_subscribers(
        &self,
        cursor: Option<&str>,
        credential: &ProviderCredential,
    ) -> AppResult<Option<SubscriberPage>>;

    /// Fetches all tags available to the account behind the credential.
    async fn list_tags(&self, credential: &ProviderCredential) -> AppResult<Option<Vec<Tag>>>;

    /// Associates `tag_id` with the subscriber identified by `email`.
    async fn tag_subscriber_by_email(
        &self,
        tag_id: &TagId,
        email: &SubscriberEmail,
        credential: &ProviderCredential,
    ) -> AppResult<TagSubscriberResponse>;
}
