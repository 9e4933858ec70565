use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::middleware::from_fn;
use axum::routing::{get, post};
use kitrelay_core::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    // Every /api route talks to the Provider, so all of them need the
    // per-request key.
    let api_routes = Router::new()
        .route(
            "/api/subscribers",
            post(handlers::subscribers::list_subscribers_handler),
        )
        .route("/api/tags", get(handlers::tags::list_tags_handler))
        .route(
            "/api/tag-subscribers",
            post(handlers::tags::tag_subscribers_handler),
        )
        .route_layer(from_fn(middleware::require_provider_credential));

    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static("kit-api-key")]);

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
