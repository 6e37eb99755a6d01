//! HTTP client construction and timed request execution.
mod agent;
mod client;
mod execution;


pub use agent::UserAgent;
pub use client::ClientSettings;
pub(crate) use execution::{TRANSPORT_FAILURE_STATUS, timed_get};
