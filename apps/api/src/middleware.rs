use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use kitrelay_core::ProviderCredential;

use crate::error::ApiResult;

/// Inbound header carrying the caller's Kit API key.
pub const PROVIDER_KEY_HEADER: &str = "Kit-Api-Key";

/// Extracts the per-request Provider credential and stashes it in request
/// extensions for handlers to pass into upstream calls.
///
/// A missing or blank header fails the request here, before any upstream
/// call is attempted. The credential lives only inside this request.
pub async fn require_provider_credential(
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let header_value = request
        .headers()
        .get(PROVIDER_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let credential = ProviderCredential::new(header_value)?;
    request.extensions_mut().insert(credential);

    Ok(next.run(request).await)
}
