use std::collections::BTreeSet;

use super::types::{RequestResult, is_error_status};

/// Median below this is reported as fast.
const FAST_MEDIAN_MS: f64 = 500.0;
/// Median below this (and at least [`FAST_MEDIAN_MS`]) is reported as slow.
const SLOW_MEDIAN_MS: f64 = 1500.0;

/// Severity bucket for a batch, keyed on its median latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyTier {
    Fast,
    Slow,
    Critical,
}

impl LatencyTier {
    #[must_use]
    pub const fn from_median_ms(median_ms: f64) -> Self {
        if median_ms < FAST_MEDIAN_MS {
            LatencyTier::Fast
        } else if median_ms < SLOW_MEDIAN_MS {
            LatencyTier::Slow
        } else {
            LatencyTier::Critical
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LatencyTier::Fast => "fast",
            LatencyTier::Slow => "slow",
            LatencyTier::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UrlSummary {
    pub statuses: BTreeSet<u16>,
    pub min_ms: f64,
    pub median_ms: f64,
    pub max_ms: f64,
}

impl UrlSummary {
    /// Summarizes a complete batch. Returns `None` for an empty batch.
    #[must_use]
    pub fn from_results(results: &[RequestResult]) -> Option<Self> {
        let mut times: Vec<f64> = results.iter().map(|result| result.elapsed_ms).collect();
        times.sort_by(f64::total_cmp);

        let min_ms = *times.first()?;
        let max_ms = *times.last()?;
        let median_ms = median(&times)?;
        let statuses = results.iter().map(|result| result.status).collect();

        Some(Self {
            statuses,
            min_ms,
            median_ms,
            max_ms,
        })
    }

    #[must_use]
    pub fn has_error_status(&self) -> bool {
        self.statuses.iter().any(|status| is_error_status(*status))
    }

    #[must_use]
    pub fn latency_tier(&self) -> LatencyTier {
        LatencyTier::from_median_ms(self.median_ms)
    }
}

// Expects sorted input; even lengths average the two middle values.
fn median(sorted: &[f64]) -> Option<f64> {
    let mid = sorted.len() / 2;
    let upper = *sorted.get(mid)?;
    if sorted.len() % 2 == 1 {
        return Some(upper);
    }
    let lower = *sorted.get(mid.checked_sub(1)?)?;
    Some((lower + upper) / 2.0)
}
