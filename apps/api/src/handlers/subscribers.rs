use axum::Json;
use axum::extract::{Extension, State};
use kitrelay_core::ProviderCredential;
use tracing::info;

use crate::error::ApiResult;
use crate::state::AppState;

/// Returns every subscriber email, walking the Provider's pagination to
/// completion server-side so the frontend sees one flat list.
pub async fn list_subscribers_handler(
    State(state): State<AppState>,
    Extension(credential): Extension<ProviderCredential>,
) -> ApiResult<Json<Vec<String>>> {
    info!("fetching subscribers from the Kit API");

    let emails = state
        .subscriber_service
        .fetch_all_subscribers(&credential)
        .await?;

    Ok(Json(emails.into_iter().map(String::from).collect()))
}
