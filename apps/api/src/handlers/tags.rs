use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kitrelay_core::{AppResult, ProviderCredential};
use kitrelay_domain::{SubscriberEmail, TagId, TaggingReport};
use tracing::info;

use crate::dto::{TagResponse, TagSubscribersRequest, TaggingReportResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// Lists the tags available to the account behind the request's API key.
pub async fn list_tags_handler(
    State(state): State<AppState>,
    Extension(credential): Extension<ProviderCredential>,
) -> ApiResult<Json<Vec<TagResponse>>> {
    let tags = state.tag_service.list_tags(&credential).await?;

    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}

/// Tags each requested email with the given tag, one upstream call per
/// email, and reports the mixed outcome.
///
/// Partial failure is not an error: the response is HTTP 200 when every
/// attempt succeeded and 206 Partial Content when at least one failed,
/// with per-email details either way.
pub async fn tag_subscribers_handler(
    State(state): State<AppState>,
    Extension(credential): Extension<ProviderCredential>,
    Json(request): Json<TagSubscribersRequest>,
) -> ApiResult<Response> {
    info!(
        count = request.emails.len(),
        tag_id = request.tag_id.as_str(),
        "tagging subscribers"
    );

    let tag_id = TagId::new(request.tag_id)?;
    let emails = request
        .emails
        .into_iter()
        .map(SubscriberEmail::new)
        .collect::<AppResult<Vec<_>>>()?;

    let report = state
        .tagging_service
        .tag_subscribers(&tag_id, &emails, &credential)
        .await;

    let status = status_for_report(&report);
    Ok((status, Json(TaggingReportResponse::from_report(report))).into_response())
}

fn status_for_report(report: &TaggingReport) -> StatusCode {
    if report.is_partial() {
        StatusCode::PARTIAL_CONTENT
    } else {
        StatusCode::OK
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use kitrelay_domain::{SubscriberEmail, TagAttemptDetail, TaggingReport};

    use super::status_for_report;

    fn email(value: &str) -> SubscriberEmail {
        SubscriberEmail::new(value).unwrap_or_else(|_| panic!("test email"))
    }

    #[test]
    fn report_without_failures_maps_to_ok() {
        let mut report = TaggingReport::new();
        report.record(TagAttemptDetail::from_status(
            email("a@x.com"),
            201,
            String::new(),
        ));

        assert_eq!(status_for_report(&report), StatusCode::OK);
    }

    #[test]
    fn report_with_failures_maps_to_partial_content() {
        let mut report = TaggingReport::new();
        report.record(TagAttemptDetail::from_status(
            email("a@x.com"),
            201,
            String::new(),
        ));
        report.record(TagAttemptDetail::from_transport_failure(
            email("b@x.com"),
            "boom".to_owned(),
        ));

        assert_eq!(status_for_report(&report), StatusCode::PARTIAL_CONTENT);
    }

    #[test]
    fn empty_report_maps_to_ok() {
        let report = TaggingReport::new();
        assert_eq!(status_for_report(&report), StatusCode::OK);
    }
}
