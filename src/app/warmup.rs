use tracing::info;

use crate::domain::RunSettings;
use crate::engine::{
    CampaignOptions, CampaignReport, CampaignReporter, WarmupEngine, run_campaign,
};
use crate::error::AppResult;
use crate::sitemap::{extract_urls, filter_once, load_sitemap};

/// Loads and filters the sitemap, then runs both campaign phases.
///
/// Sitemap failures abort before any warm-up request is sent. Failures of
/// individual warm-up requests only show up in the report.
///
/// # Errors
///
/// Returns an error when the sitemap cannot be fetched or parsed.
pub async fn run_warmup<R>(settings: &RunSettings, reporter: &mut R) -> AppResult<CampaignReport>
where
    R: CampaignReporter + ?Sized,
{
    let document = load_sitemap(&settings.client, &settings.sitemap_url).await?;
    let urls = extract_urls(&document)?;
    let filtered = filter_once(&urls, &settings.ignore_patterns);
    info!(
        "Sitemap lists {} URLs, {} left after once-patterns",
        urls.len(),
        filtered.len()
    );
    reporter.urls_ready(urls.len(), filtered.len());

    let engine = WarmupEngine::new(settings.client.clone());
    let options = CampaignOptions::new(settings.workers).with_pause(settings.pause);
    Ok(run_campaign(&engine, &filtered, &options, reporter).await)
}
