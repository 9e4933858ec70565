use serde::Serialize;

use crate::SubscriberEmail;

/// Status marker recorded when a tagging call never produced an HTTP status.
pub const TRANSPORT_FAILURE_STATUS: &str = "ERROR";

/// Terminal outcome of one tag-association attempt.
///
/// Each email moves from pending to exactly one of these; there are no
/// retries within a bulk operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaggingOutcome {
    /// The Provider created a new tag association (HTTP 201).
    Created,
    /// The subscriber already carried the tag; idempotent no-op (HTTP 200).
    AlreadyAssociated,
    /// Any other Provider status, or a transport-level failure.
    Failed,
}

/// Per-email record of a tagging attempt.
#[derive(Debug, Clone, Serialize)]
pub struct TagAttemptDetail {
    /// The email the attempt was made for.
    pub email: SubscriberEmail,
    /// Classified outcome of the attempt.
    pub outcome: TaggingOutcome,
    /// Upstream HTTP status code, or [`TRANSPORT_FAILURE_STATUS`] when the
    /// call failed before a status was received.
    pub status: String,
    /// Raw upstream response body, or the failure message.
    pub result: String,
}

impl TagAttemptDetail {
    /// Builds a detail record from an upstream HTTP status and body.
    #[must_use]
    pub fn from_status(email: SubscriberEmail, status_code: u16, body: String) -> Self {
        let outcome = match status_code {
            201 => TaggingOutcome::Created,
            200 => TaggingOutcome::AlreadyAssociated,
            _ => TaggingOutcome::Failed,
        };

        Self {
            email,
            outcome,
            status: status_code.to_string(),
            result: body,
        }
    }

    /// Builds a detail record for a call that failed at the transport level.
    #[must_use]
    pub fn from_transport_failure(email: SubscriberEmail, message: String) -> Self {
        Self {
            email,
            outcome: TaggingOutcome::Failed,
            status: TRANSPORT_FAILURE_STATUS.to_owned(),
            result: message,
        }
    }
}

/// Aggregate result of a bulk tagging operation.
///
/// Assembled once by iterating the input emails in order; neither total
/// success nor total failure aborts assembly. `failed > 0` signals a
/// partial result to the caller.
#[derive(Debug, Default, Serialize)]
pub struct TaggingReport {
    /// Number of newly created tag associations.
    pub success: u32,
    /// Number of subscribers that already carried the tag.
    pub already_tagged: u32,
    /// Number of attempts that failed.
    pub failed: u32,
    /// One record per input email, in input order.
    pub details: Vec<TagAttemptDetail>,
}

impl TaggingReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a detail record and bumps the matching counter.
    pub fn record(&mut self, detail: TagAttemptDetail) {
        match detail.outcome {
            TaggingOutcome::Created => self.success += 1,
            TaggingOutcome::AlreadyAssociated => self.already_tagged += 1,
            TaggingOutcome::Failed => self.failed += 1,
        }

        self.details.push(detail);
    }

    /// True when at least one attempt failed, i.e. the overall result is
    /// partial rather than a full success.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.failed > 0
    }

    /// Human-readable summary embedding the three counters.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Processing complete. Successfully tagged: {}, Already tagged: {}, Failed: {}",
            self.success, self.already_tagged, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{TRANSPORT_FAILURE_STATUS, TagAttemptDetail, TaggingOutcome, TaggingReport};
    use crate::SubscriberEmail;

    fn email(value: &str) -> SubscriberEmail {
        SubscriberEmail::new(value).unwrap_or_else(|_| panic!("test email"))
    }

    #[test]
    fn status_201_classifies_as_created() {
        let detail = TagAttemptDetail::from_status(email("a@x.com"), 201, "{}".to_owned());
        assert_eq!(detail.outcome, TaggingOutcome::Created);
        assert_eq!(detail.status, "201");
    }

    #[test]
    fn status_200_classifies_as_already_associated() {
        let detail = TagAttemptDetail::from_status(email("a@x.com"), 200, "{}".to_owned());
        assert_eq!(detail.outcome, TaggingOutcome::AlreadyAssociated);
    }

    #[test]
    fn unexpected_status_classifies_as_failed() {
        let detail = TagAttemptDetail::from_status(email("a@x.com"), 422, "bad".to_owned());
        assert_eq!(detail.outcome, TaggingOutcome::Failed);
        assert_eq!(detail.status, "422");
    }

    #[test]
    fn transport_failure_uses_error_marker() {
        let detail =
            TagAttemptDetail::from_transport_failure(email("a@x.com"), "timed out".to_owned());
        assert_eq!(detail.outcome, TaggingOutcome::Failed);
        assert_eq!(detail.status, TRANSPORT_FAILURE_STATUS);
        assert_eq!(detail.result, "timed out");
    }

    #[test]
    fn report_counts_follow_recorded_outcomes() {
        let mut report = TaggingReport::new();
        report.record(TagAttemptDetail::from_status(
            email("a@x.com"),
            201,
            String::new(),
        ));
        report.record(TagAttemptDetail::from_status(
            email("b@x.com"),
            200,
            String::new(),
        ));
        report.record(TagAttemptDetail::from_transport_failure(
            email("c@x.com"),
            "boom".to_owned(),
        ));

        assert_eq!(report.success, 1);
        assert_eq!(report.already_tagged, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.details.len(), 3);
        assert!(report.is_partial());
    }

    #[test]
    fn empty_report_is_a_full_success() {
        let report = TaggingReport::new();
        assert!(!report.is_partial());
        assert_eq!(
            report.summary(),
            "Processing complete. Successfully tagged: 0, Already tagged: 0, Failed: 0"
        );
    }
}
