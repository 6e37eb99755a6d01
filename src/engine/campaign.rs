use std::time::Duration;

use tracing::{debug, warn};

use crate::args::{DEFAULT_PAUSE, PositiveUsize};
use crate::metrics::UrlSummary;

use super::Warmer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// One request per URL to wake the target up.
    Priming,
    /// The configured number of concurrent requests per URL.
    FullPower,
}

impl Phase {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Priming => "First request",
            Phase::FullPower => "Full power",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CampaignOptions {
    pub workers: PositiveUsize,
    pub pause: Duration,
}

impl CampaignOptions {
    #[must_use]
    pub const fn new(workers: PositiveUsize) -> Self {
        Self {
            workers,
            pause: DEFAULT_PAUSE,
        }
    }

    #[must_use]
    pub const fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseReport {
    pub phase: Phase,
    pub workers: usize,
    pub urls_tested: usize,
    pub urls_flagged: usize,
    pub requests: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignReport {
    pub phases: Vec<PhaseReport>,
}

impl CampaignReport {
    #[must_use]
    pub fn total_requests(&self) -> usize {
        self.phases
            .iter()
            .fold(0usize, |acc, phase| acc.saturating_add(phase.requests))
    }
}

/// Receives campaign progress; the console implementation lives in `ui`.
pub trait CampaignReporter {
    /// Called once the sitemap has been read and filtered, before any request.
    fn urls_ready(&mut self, _discovered: usize, _kept: usize) {}
    fn phase_started(&mut self, phase: Phase, workers: usize, total_urls: usize);
    fn url_started(&mut self, phase: Phase, position: usize, total_urls: usize, url: &str);
    fn url_finished(&mut self, phase: Phase, url: &str, summary: &UrlSummary);
    fn campaign_finished(&mut self, report: &CampaignReport);
}

/// Priming pass with one worker over every URL, then the full-power pass
/// with `options.workers`. URLs are processed one at a time in both passes.
pub async fn run_campaign<W, R>(
    warmer: &W,
    urls: &[String],
    options: &CampaignOptions,
    reporter: &mut R,
) -> CampaignReport
where
    W: Warmer + ?Sized,
    R: CampaignReporter + ?Sized,
{
    let priming_workers = PositiveUsize::MIN;
    let mut report = CampaignReport::default();
    for (phase, workers) in [
        (Phase::Priming, priming_workers),
        (Phase::FullPower, options.workers),
    ] {
        let phase_report = run_phase(warmer, urls, phase, workers, options.pause, reporter).await;
        report.phases.push(phase_report);
    }
    reporter.campaign_finished(&report);
    report
}

async fn run_phase<W, R>(
    warmer: &W,
    urls: &[String],
    phase: Phase,
    workers: PositiveUsize,
    pause: Duration,
    reporter: &mut R,
) -> PhaseReport
where
    W: Warmer + ?Sized,
    R: CampaignReporter + ?Sized,
{
    let total = urls.len();
    reporter.phase_started(phase, workers.get(), total);

    let mut phase_report = PhaseReport {
        phase,
        workers: workers.get(),
        urls_tested: 0,
        urls_flagged: 0,
        requests: 0,
    };

    for (idx, url) in urls.iter().enumerate() {
        reporter.url_started(phase, idx.saturating_add(1), total, url);
        let results = warmer.warm_url(url, workers).await;
        phase_report.requests = phase_report.requests.saturating_add(results.len());
        phase_report.urls_tested = phase_report.urls_tested.saturating_add(1);

        match UrlSummary::from_results(&results) {
            Some(summary) => {
                if summary.has_error_status() {
                    phase_report.urls_flagged = phase_report.urls_flagged.saturating_add(1);
                }
                debug!(
                    "{} {}: median {:.2}ms ({})",
                    phase.label(),
                    url,
                    summary.median_ms,
                    summary.latency_tier().as_str()
                );
                reporter.url_finished(phase, url, &summary);
            }
            None => warn!("No results recorded for {}", url),
        }

        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
    }

    phase_report
}
