//! Bulk tag association with per-item failure isolation.

use std::sync::Arc;

use tracing::{info, warn};

use kitrelay_core::ProviderCredential;
use kitrelay_domain::{SubscriberEmail, TagAttemptDetail, TagId, TaggingReport};

use crate::ProviderClient;

/// Application service that tags a batch of subscribers one call at a time.
///
/// The Provider's bulk endpoint wants subscriber ids, which the listing
/// never exposes, so each email gets its own upstream call. Calls run
/// strictly sequentially; a failing email never aborts the rest of the
/// batch.
#[derive(Clone)]
pub struct TaggingService {
    provider: Arc<dyn ProviderClient>,
}

impl TaggingService {
    /// Creates a new tagging service.
    #[must_use]
    pub fn new(provider: Arc<dyn ProviderClient>) -> Self {
        Self { provider }
    }

    /// Associates `tag_id` with every email in input order and reports the
    /// aggregate outcome.
    ///
    /// Always completes and always returns a report: upstream statuses are
    /// classified per item (201 created, 200 already tagged, anything else
    /// failed) and transport failures are recorded with the `ERROR` status
    /// marker instead of propagating.
    pub async fn tag_subscribers(
        &self,
        tag_id: &TagId,
        emails: &[SubscriberEmail],
        credential: &ProviderCredential,
    ) -> TaggingReport {
        info!(
            tag_id = tag_id.as_str(),
            count = emails.len(),
            "tagging subscribers"
        );

        let mut report = TaggingReport::new();

        for email in emails {
            let detail = match self
                .provider
                .tag_subscriber_by_email(tag_id, email, credential)
                .await
            {
                Ok(response) => {
                    TagAttemptDetail::from_status(email.clone(), response.status_code, response.body)
                }
                Err(error) => {
                    warn!(email = email.as_str(), %error, "tagging subscriber failed");
                    TagAttemptDetail::from_transport_failure(email.clone(), error.to_string())
                }
            };

            report.record(detail);
        }

        info!(
            success = report.success,
            already_tagged = report.already_tagged,
            failed = report.failed,
            "tagging complete"
        );
        report
    }
}
