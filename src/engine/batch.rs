use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::args::PositiveUsize;
use crate::http::{ClientSettings, TRANSPORT_FAILURE_STATUS, timed_get};
use crate::metrics::RequestResult;

use super::Warmer;

/// Runs each batch as `workers` tokio tasks on the ambient runtime and joins
/// them all before returning.
#[derive(Debug, Clone)]
pub struct WarmupEngine {
    settings: Arc<ClientSettings>,
}

impl WarmupEngine {
    #[must_use]
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

#[async_trait]
impl Warmer for WarmupEngine {
    async fn warm_url(&self, url: &str, workers: PositiveUsize) -> Vec<RequestResult> {
        let count = workers.get();
        let started = Instant::now();
        let mut handles = Vec::with_capacity(count);
        for _ in 0..count {
            let settings = Arc::clone(&self.settings);
            let url = url.to_owned();
            handles.push(tokio::spawn(
                async move { timed_get(&settings, &url).await },
            ));
        }

        join_batch(url, handles, started).await
    }
}

/// Awaits every handle in order. A task that panicked or was cancelled counts
/// as a transport failure lasting from `started` until it was joined.
pub(crate) async fn join_batch(
    url: &str,
    handles: Vec<JoinHandle<RequestResult>>,
    started: Instant,
) -> Vec<RequestResult> {
    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(result) => results.push(result),
            Err(err) => {
                error!("Warm-up task for {} did not finish: {}", url, err);
                let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
                results.push(RequestResult::new(TRANSPORT_FAILURE_STATUS, elapsed_ms));
            }
        }
    }
    debug!("Joined {} requests for {}", results.len(), url);
    results
}
