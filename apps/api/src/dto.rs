use kitrelay_domain::{Tag, TaggingReport};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../frontend/src/generated/health-response.ts")]
pub struct HealthResponse {
    pub status: &'static str,
}

/// A Provider tag as exposed to the frontend.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../frontend/src/generated/tag-response.ts")]
pub struct TagResponse {
    pub id: String,
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(value: Tag) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

/// Request to tag a set of subscriber emails with one tag.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../frontend/src/generated/tag-subscribers-request.ts")]
pub struct TagSubscribersRequest {
    /// Subscriber emails to tag, processed in this order.
    pub emails: Vec<String>,
    /// Identifier of the tag to associate.
    pub tag_id: String,
}

/// Per-outcome counters of a bulk tagging run.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../frontend/src/generated/tagging-counts.ts")]
pub struct TaggingCountsResponse {
    pub success: u32,
    pub already_tagged: u32,
    pub failed: u32,
}

/// Per-email record of a tagging attempt.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../frontend/src/generated/tag-attempt-detail.ts")]
pub struct TagAttemptDetailResponse {
    pub email: String,
    /// Upstream HTTP status code, or `"ERROR"` for transport failures.
    pub status: String,
    /// Raw upstream body or failure message.
    pub result: String,
}

/// Aggregate result of a bulk tagging run.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../frontend/src/generated/tagging-report-response.ts")]
pub struct TaggingReportResponse {
    pub message: String,
    pub details: TaggingCountsResponse,
    pub email_details: Vec<TagAttemptDetailResponse>,
}

impl TaggingReportResponse {
    /// Maps the domain report into the wire payload.
    #[must_use]
    pub fn from_report(report: TaggingReport) -> Self {
        Self {
            message: report.summary(),
            details: TaggingCountsResponse {
                success: report.success,
                already_tagged: report.already_tagged,
                failed: report.failed,
            },
            email_details: report
                .details
                .into_iter()
                .map(|detail| TagAttemptDetailResponse {
                    email: String::from(detail.email),
                    status: detail.status,
                    result: detail.result,
                })
                .collect(),
        }
    }
}
