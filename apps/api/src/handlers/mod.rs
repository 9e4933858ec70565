pub mod health;
pub mod subscribers;
pub mod tags;
