//! Application services and ports.

#![forbid(unsafe_code)]

mod provider_ports;
mod subscriber_service;
mod tag_service;
mod tagging_service;

pub use provider_ports::{ProviderClient, SubscriberPage, TagSubscriberResponse};
pub use subscriber_service::{DEFAULT_PAGE_FOLLOW_LIMIT, SubscriberService};
pub use tag_service::TagService;
pub use tagging_service::TaggingService;
