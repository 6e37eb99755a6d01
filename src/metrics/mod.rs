//! Per-request results and the per-URL summary built from them.
mod summary;
mod types;


pub use summary::{LatencyTier, UrlSummary};
pub use types::RequestResult;
