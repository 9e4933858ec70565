use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kitrelay_core::AppError;
use serde::Serialize;
use ts_rs::TS;

/// API error payload.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../frontend/src/generated/error-response.ts")]
pub struct ErrorResponse {
    message: String,
}

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);

        let payload = Json(ErrorResponse {
            message: self.0.to_string(),
        });

        (status, payload).into_response()
    }
}

fn status_for(error: &AppError) -> StatusCode {
    match error {
        AppError::Validation(_) => StatusCode::BAD_REQUEST,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::CredentialMissing(_) => StatusCode::UNAUTHORIZED,
        // Both upstream failure modes surface as client-facing bad requests.
        AppError::UpstreamUnavailable(_) | AppError::UpstreamCallFailed(_) => {
            StatusCode::BAD_REQUEST
        }
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::status_for;
    use axum::http::StatusCode;
    use kitrelay_core::AppError;

    #[test]
    fn upstream_unavailable_maps_to_bad_request() {
        let status = status_for(&AppError::UpstreamUnavailable("down".to_owned()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_call_failure_maps_to_bad_request() {
        let status = status_for(&AppError::UpstreamCallFailed("status 500".to_owned()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let status = status_for(&AppError::NotFound("no subscribers found".to_owned()));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn credential_missing_maps_to_unauthorized() {
        let status = status_for(&AppError::CredentialMissing("no key".to_owned()));
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
