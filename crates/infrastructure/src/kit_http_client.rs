use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use kitrelay_application::{ProviderClient, SubscriberPage, TagSubscriberResponse};
use kitrelay_core::{AppError, AppResult, ProviderCredential};
use kitrelay_domain::{SubscriberEmail, Tag, TagId};

/// Production base URL of the Kit v4 API.
pub const DEFAULT_KIT_API_BASE_URL: &str = "https://api.kit.com/v4";

const API_KEY_HEADER: &str = "X-Kit-Api-Key";

/// HTTP implementation of the [`ProviderClient`] port against the Kit API.
pub struct KitHttpClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl KitHttpClient {
    /// Creates a new Kit API client for the given base URL.
    #[must_use]
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    fn subscribers_url(&self, cursor: Option<&str>) -> String {
        match cursor {
            Some(cursor) => format!("{}/subscribers?after={cursor}", self.base_url),
            None => format!("{}/subscribers", self.base_url),
        }
    }

    fn tags_url(&self) -> String {
        format!("{}/tags", self.base_url)
    }

    fn tag_subscribers_url(&self, tag_id: &TagId) -> String {
        format!("{}/tags/{}/subscribers", self.base_url, tag_id.as_str())
    }

    /// Issues a GET and decodes the body, mapping an empty or `null` body
    /// to `None` (the Kit API occasionally answers 2xx with no payload).
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        credential: &ProviderCredential,
    ) -> AppResult<Option<T>> {
        debug!(url, "calling Kit API");
        let response = self
            .http_client
            .get(url)
            .header(API_KEY_HEADER, credential.as_str())
            .send()
            .await
            .map_err(|error| {
                AppError::UpstreamCallFailed(format!("transport error calling Kit API: {error}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<response body unavailable>".to_owned());
            return Err(AppError::UpstreamCallFailed(format!(
                "Kit API returned status {status}: {body}"
            )));
        }

        let body = response.text().await.map_err(|error| {
            AppError::UpstreamCallFailed(format!("failed to read Kit API response: {error}"))
        })?;

        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(None);
        }

        serde_json::from_str(&body).map(Some).map_err(|error| {
            AppError::UpstreamCallFailed(format!("failed to decode Kit API response: {error}"))
        })
    }
}

#[async_trait]
impl ProviderClient for KitHttpClient {
    async fn list_subscribers(
        &self,
        cursor: Option<&str>,
        credential: &ProviderCredential,
    ) -> AppResult<Option<SubscriberPage>> {
        let url = self.subscribers_url(cursor);
        let envelope: Option<SubscribersEnvelope> = self.get_json(&url, credential).await?;

        envelope.map(SubscribersEnvelope::into_page).transpose()
    }

    async fn list_tags(&self, credential: &ProviderCredential) -> AppResult<Option<Vec<Tag>>> {
        let url = self.tags_url();
        let envelope: Option<TagsEnvelope> = self.get_json(&url, credential).await?;

        Ok(envelope.map(TagsEnvelope::into_tags))
    }

    async fn tag_subscriber_by_email(
        &self,
        tag_id: &TagId,
        email: &SubscriberEmail,
        credential: &ProviderCredential,
    ) -> AppResult<TagSubscriberResponse> {
        let url = self.tag_subscribers_url(tag_id);
        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, credential.as_str())
            .json(&serde_json::json!({ "email_address": email.as_str() }))
            .send()
            .await
            .map_err(|error| {
                AppError::UpstreamCallFailed(format!("transport error calling Kit API: {error}"))
            })?;

        let status_code = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<response body unavailable>".to_owned());

        Ok(TagSubscriberResponse { status_code, body })
    }
}

#[derive(Debug, Deserialize)]
struct SubscribersEnvelope {
    #[serde(default)]
    subscribers: Option<Vec<WireSubscriber>>,
    #[serde(default)]
    pagination: Option<WirePagination>,
}

impl SubscribersEnvelope {
    fn into_page(self) -> AppResult<SubscriberPage> {
        let emails = self
            .subscribers
            .unwrap_or_default()
            .into_iter()
            .map(|subscriber| SubscriberEmail::new(subscriber.email_address))
            .collect::<AppResult<Vec<_>>>()
            .map_err(|error| {
                AppError::UpstreamCallFailed(format!(
                    "Kit API returned an invalid subscriber email: {error}"
                ))
            })?;

        Ok(SubscriberPage {
            emails,
            end_cursor: self.pagination.and_then(|pagination| pagination.end_cursor),
        })
    }
}

#[derive(Debug, Deserialize)]
struct WireSubscriber {
    email_address: String,
}

#[derive(Debug, Deserialize)]
struct WirePagination {
    #[serde(default)]
    end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TagsEnvelope {
    #[serde(default)]
    tags: Option<Vec<WireTag>>,
}

impl TagsEnvelope {
    fn into_tags(self) -> Vec<Tag> {
        self.tags
            .unwrap_or_default()
            .into_iter()
            .map(|tag| Tag {
                // Tag ids are numeric on the wire; callers treat them as
                // opaque strings.
                id: tag.id.to_string(),
                name: tag.name,
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct WireTag {
    id: i64,
    name: String,
}
