use tracing::{debug, info};

use crate::error::SitemapError;
use crate::http::ClientSettings;

/// Fetches the sitemap body. Any non-success status aborts the run.
///
/// # Errors
///
/// Returns [`SitemapError::Fetch`] for a non-success status and
/// [`SitemapError::Transport`] / [`SitemapError::ReadBody`] when the request or
/// body read fails.
pub async fn load_sitemap(settings: &ClientSettings, url: &str) -> Result<String, SitemapError> {
    let client = settings
        .build_client()
        .map_err(|err| SitemapError::Client { source: err })?;

    info!("Fetching sitemap {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| SitemapError::Transport {
            url: url.to_owned(),
            source: err,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SitemapError::Fetch {
            url: url.to_owned(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|err| SitemapError::ReadBody {
        url: url.to_owned(),
        source: err,
    })?;
    debug!("Sitemap body is {} bytes", body.len());
    Ok(body)
}
