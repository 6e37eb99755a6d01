//! Warm-up engine: concurrent request batches per URL and the two-phase
//! campaign that drives them.
mod batch;
mod campaign;


use async_trait::async_trait;

use crate::args::PositiveUsize;
use crate::metrics::RequestResult;

pub use batch::WarmupEngine;
pub use campaign::{
    CampaignOptions, CampaignReport, CampaignReporter, Phase, PhaseReport, run_campaign,
};

/// Issues one batch of concurrent requests against a URL.
#[async_trait]
pub trait Warmer: Send + Sync {
    /// Returns exactly `workers` results, whatever happened to each request.
    async fn warm_url(&self, url: &str, workers: PositiveUsize) -> Vec<RequestResult>;
}
