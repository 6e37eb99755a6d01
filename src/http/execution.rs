use std::time::Instant;

use futures_util::StreamExt;
use tracing::{debug, warn};

use crate::metrics::RequestResult;

use super::ClientSettings;

/// Status recorded when no HTTP response arrived (timeout, refused connection,
/// TLS failure). Sits inside the 400-599 band so it is flagged like a server error.
pub(crate) const TRANSPORT_FAILURE_STATUS: u16 = 599;

/// Issues one GET on a dedicated client and times it up to the response
/// headers. Never fails: transport problems come back as
/// [`TRANSPORT_FAILURE_STATUS`].
pub(crate) async fn timed_get(settings: &ClientSettings, url: &str) -> RequestResult {
    let client = match settings.build_client() {
        Ok(client) => client,
        Err(err) => {
            warn!("Skipping request to {}: {}", url, err);
            return RequestResult::new(TRANSPORT_FAILURE_STATUS, 0.0);
        }
    };

    let started = Instant::now();
    let sent = client.get(url).send().await;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    match sent {
        Ok(response) => {
            let status = response.status().as_u16();
            if let Err(err) = drain_response_body(response).await {
                debug!("Failed to drain body from {}: {}", url, err);
            }
            RequestResult::new(status, elapsed_ms)
        }
        Err(err) => {
            if err.is_timeout() {
                warn!("Request to {} timed out: {}", url, err);
            } else {
                warn!("Request to {} failed: {}", url, err);
            }
            RequestResult::new(TRANSPORT_FAILURE_STATUS, elapsed_ms)
        }
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
