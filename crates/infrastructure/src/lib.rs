//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod kit_http_client;

pub use kit_http_client::{DEFAULT_KIT_API_BASE_URL, KitHttpClient};
