//! Core library for the `wakeup` CLI.
//!
//! The binary loads a sitemap, collapses URL families matched by once-patterns,
//! then requests every remaining page twice over: once to wake the target up
//! and once with a burst of concurrent workers. The modules here are the
//! building blocks for that flow: argument and config handling, HTTP client
//! construction, sitemap parsing, the warm-up engine, latency summaries and
//! console output.
pub mod app;
pub mod args;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod http;
pub mod metrics;
pub mod sitemap;
pub mod ui;

#[cfg(test)]
mod test_support;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
