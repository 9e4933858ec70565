//! Subscriber listing across the Provider's cursor-paginated API.

use std::sync::Arc;

use tracing::{debug, warn};

use kitrelay_core::{AppError, AppResult, ProviderCredential};
use kitrelay_domain::SubscriberEmail;

use crate::ProviderClient;

/// Default ceiling on continuation calls after the first page.
///
/// The Provider hands back an `end_cursor` even past the last real page, so
/// looping on cursor presence alone would never terminate. The ceiling is a
/// defensive bound, not a business rule: hitting it is logged and whatever
/// accumulated so far is returned as success.
pub const DEFAULT_PAGE_FOLLOW_LIMIT: usize = 8;

/// Application service that walks the Provider's subscriber pagination to
/// completion.
#[derive(Clone)]
pub struct SubscriberService {
    provider: Arc<dyn ProviderClient>,
    page_follow_limit: usize,
}

impl SubscriberService {
    /// Creates a subscriber service with the default page-follow limit.
    #[must_use]
    pub fn new(provider: Arc<dyn ProviderClient>) -> Self {
        Self {
            provider,
            page_follow_limit: DEFAULT_PAGE_FOLLOW_LIMIT,
        }
    }

    /// Overrides the continuation-call ceiling.
    #[must_use]
    pub fn with_page_follow_limit(mut self, page_follow_limit: usize) -> Self {
        self.page_follow_limit = page_follow_limit;
        self
    }

    /// Fetches every subscriber email, chaining on the Provider's opaque
    /// end cursor until it signals completion or the follow limit is hit.
    ///
    /// A missing response on the *first* page is `UpstreamUnavailable` and a
    /// first page with zero subscribers is `NotFound` -- "provider down" and
    /// "provider has zero subscribers" are distinct results. Mid-pagination,
    /// a missing response or an empty page just ends the walk; a transport
    /// error aborts the whole operation.
    pub async fn fetch_all_subscribers(
        &self,
        credential: &ProviderCredential,
    ) -> AppResult<Vec<SubscriberEmail>> {
        let first_page = self
            .provider
            .list_subscribers(None, credential)
            .await?
            .ok_or_else(|| {
                AppError::UpstreamUnavailable("no response from the Kit API".to_owned())
            })?;

        if first_page.emails.is_empty() {
            return Err(AppError::NotFound("no subscribers found".to_owned()));
        }

        let mut emails = first_page.emails;
        let mut cursor = first_page.end_cursor;
        let mut remaining_follows = self.page_follow_limit;

        while let Some(current) = cursor.take().filter(|value| !value.is_empty()) {
            if remaining_follows == 0 {
                warn!(
                    page_follow_limit = self.page_follow_limit,
                    "page follow limit reached, stopping pagination"
                );
                break;
            }
            remaining_follows -= 1;

            debug!(cursor = current.as_str(), "fetching next subscriber page");
            let Some(page) = self.provider.list_subscribers(Some(&current), credential).await?
            else {
                // Upstream pagination terminated; not an error.
                break;
            };

            if page.emails.is_empty() {
                break;
            }

            emails.extend(page.emails);
            cursor = page.end_cursor;
        }

        debug!(total = emails.len(), "finished fetching subscribers");
        Ok(emails)
    }
}
