use kitrelay_application::{SubscriberService, TagService, TaggingService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub subscriber_service: SubscriberService,
    pub tag_service: TagService,
    pub tagging_service: TaggingService,
}
