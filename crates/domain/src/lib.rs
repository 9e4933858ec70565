//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod subscriber;
mod tag;
mod tagging;

pub use subscriber::SubscriberEmail;
pub use tag::{Tag, TagId};
pub use tagging::{TagAttemptDetail, TaggingOutcome, TaggingReport};
