//! Kitrelay API composition root.

#![forbid(unsafe_code)]

mod api_router;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use kitrelay_application::{ProviderClient, SubscriberService, TagService, TaggingService};
use kitrelay_core::AppError;
use kitrelay_infrastructure::{DEFAULT_KIT_API_BASE_URL, KitHttpClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let frontend_url =
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());
    let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let api_port = env::var("API_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let kit_api_base_url =
        env::var("KIT_API_BASE_URL").unwrap_or_else(|_| DEFAULT_KIT_API_BASE_URL.to_owned());

    let http_client = reqwest::Client::new();
    let provider: Arc<dyn ProviderClient> =
        Arc::new(KitHttpClient::new(http_client, kit_api_base_url));

    let app_state = AppState {
        subscriber_service: SubscriberService::new(provider.clone()),
        tag_service: TagService::new(provider.clone()),
        tagging_service: TaggingService::new(provider),
    };

    let app = api_router::build_router(app_state, &frontend_url)?;

    let host = IpAddr::from_str(&api_host)
        .map_err(|error| AppError::Internal(format!("invalid API_HOST '{api_host}': {error}")))?;
    let address = SocketAddr::from((host, api_port));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "kitrelay-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
