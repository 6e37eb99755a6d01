use std::io::{self, IsTerminal, Write};

use crossterm::style::{Color, Stylize};
use tracing::debug;

use crate::engine::{CampaignReport, CampaignReporter, Phase};
use crate::metrics::{LatencyTier, UrlSummary};

use super::format::{format_ms, group_thousands};

const SEPARATOR_WIDTH: usize = 50;

/// Line-oriented progress output. Write failures are logged and otherwise
/// ignored; they never stop the campaign.
pub struct ConsoleReporter<W: Write> {
    out: W,
    use_color: bool,
    workers: usize,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter on stdout; colors only when stdout is a terminal.
    #[must_use]
    pub fn stdout(no_color: bool) -> Self {
        let stdout = io::stdout();
        let use_color = !no_color && stdout.is_terminal();
        Self::new(stdout, use_color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    #[must_use]
    pub const fn new(out: W, use_color: bool) -> Self {
        Self {
            out,
            use_color,
            workers: 1,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_color {
            text.with(color).to_string()
        } else {
            text.to_owned()
        }
    }

    fn emit(&mut self, lines: &[String]) {
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(self.out, "{}", line))
            .and_then(|()| self.out.flush());
        if let Err(err) = result {
            debug!("Failed to write progress output: {}", err);
        }
    }
}

const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Priming => Color::Green,
        Phase::FullPower => Color::Red,
    }
}

const fn tier_color(tier: LatencyTier) -> Color {
    match tier {
        LatencyTier::Fast => Color::Green,
        LatencyTier::Slow => Color::Yellow,
        LatencyTier::Critical => Color::Red,
    }
}

fn format_statuses(summary: &UrlSummary) -> String {
    let joined = summary
        .statuses
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", joined)
}

impl<W: Write> CampaignReporter for ConsoleReporter<W> {
    fn urls_ready(&mut self, discovered: usize, kept: usize) {
        let total = group_thousands(&kept.to_string());
        let line = if discovered == kept {
            format!("Testing {} total URLs.", total)
        } else {
            format!(
                "Testing {} total URLs. ({} listed in sitemap, {} skipped by once-patterns)",
                total,
                group_thousands(&discovered.to_string()),
                group_thousands(&discovered.saturating_sub(kept).to_string())
            )
        };
        let line = self.paint(&line, Color::Yellow);
        self.emit(&[line, String::new()]);
    }

    fn phase_started(&mut self, phase: Phase, workers: usize, _total_urls: usize) {
        self.workers = workers;
        let title = match phase {
            Phase::Priming => "Running with one worker to wake systems...".to_owned(),
            Phase::FullPower => format!("Running full power with {} workers...", workers),
        };
        let title = self.paint(&title.to_uppercase(), phase_color(phase));
        self.emit(&[
            "*".repeat(SEPARATOR_WIDTH),
            String::new(),
            title,
            String::new(),
        ]);
    }

    fn url_started(&mut self, phase: Phase, position: usize, total_urls: usize, url: &str) {
        let prefix = self.paint(phase.label(), phase_color(phase));
        let line = format!(
            "{}: {}/{}: Testing url, {} workers: {}...",
            prefix, position, total_urls, self.workers, url
        );
        self.emit(&[line]);
    }

    fn url_finished(&mut self, _phase: Phase, _url: &str, summary: &UrlSummary) {
        let mut lines = Vec::with_capacity(3);
        if summary.has_error_status() {
            let statuses = format!("Statuses: {}", format_statuses(summary));
            lines.push(self.paint(&statuses, Color::Red));
        }
        let times = format!(
            "Times: min: {}, median: {}, max: {}",
            format_ms(summary.min_ms),
            format_ms(summary.median_ms),
            format_ms(summary.max_ms)
        );
        lines.push(self.paint(&times, tier_color(summary.latency_tier())));
        lines.push(String::new());
        self.emit(&lines);
    }

    fn campaign_finished(&mut self, report: &CampaignReport) {
        let mut lines = vec!["*".repeat(SEPARATOR_WIDTH), String::new()];
        for phase in &report.phases {
            let line = format!(
                "{}: {} URLs warmed with {} workers, {} flagged.",
                phase.phase.label(),
                phase.urls_tested,
                phase.workers,
                phase.urls_flagged
            );
            let color = if phase.urls_flagged == 0 {
                Color::Green
            } else {
                Color::Red
            };
            lines.push(self.paint(&line, color));
        }
        lines.push(format!("Total requests: {}", report.total_requests()));
        self.emit(&lines);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::engine::PhaseReport;

    fn summary(statuses: &[u16], median_ms: f64) -> UrlSummary {
        UrlSummary {
            statuses: statuses.iter().copied().collect::<BTreeSet<u16>>(),
            min_ms: 1.0,
            median_ms,
            max_ms: 2_345.678,
        }
    }

    fn output(reporter: ConsoleReporter<Vec<u8>>) -> Result<String, String> {
        String::from_utf8(reporter.into_inner()).map_err(|err| err.to_string())
    }

    #[test]
    fn url_lines_follow_progress_format() -> Result<(), String> {
        let mut reporter = ConsoleReporter::new(Vec::new(), false);
        reporter.phase_started(Phase::FullPower, 12, 3);
        reporter.url_started(Phase::FullPower, 2, 3, "https://site.test/b");
        reporter.url_finished(Phase::FullPower, "https://site.test/b", &summary(&[200], 20.0));
        let text = output(reporter)?;

        let checks = [
            "RUNNING FULL POWER WITH 12 WORKERS...",
            "Full power: 2/3: Testing url, 12 workers: https://site.test/b...",
            "Times: min: 1.00, median: 20.00, max: 2,345.68",
        ];
        for expected in checks {
            if !text.contains(expected) {
                return Err(format!("Missing '{}' in:\n{}", expected, text));
            }
        }
        if text.contains("Statuses:") {
            return Err("Healthy batch should not print statuses".to_owned());
        }
        Ok(())
    }

    #[test]
    fn error_statuses_are_listed() -> Result<(), String> {
        let mut reporter = ConsoleReporter::new(Vec::new(), false);
        reporter.url_finished(Phase::Priming, "/x", &summary(&[200, 502], 20.0));
        let text = output(reporter)?;
        if !text.contains("Statuses: {200, 502}") {
            return Err(format!("Missing statuses in:\n{}", text));
        }
        Ok(())
    }

    #[test]
    fn colors_follow_latency_tier() -> Result<(), String> {
        let mut reporter = ConsoleReporter::new(Vec::new(), true);
        reporter.url_finished(Phase::Priming, "/x", &summary(&[200], 2_000.0));
        let text = output(reporter)?;
        let expected = "Times: min: 1.00, median: 2,000.00, max: 2,345.68".with(Color::Red).to_string();
        if !text.contains(&expected) {
            return Err(format!("Expected red times line in:\n{:?}", text));
        }
        Ok(())
    }

    #[test]
    fn url_counts_share_thousands_grouping() -> Result<(), String> {
        let mut reporter = ConsoleReporter::new(Vec::new(), false);
        reporter.urls_ready(12_345, 1_234);
        reporter.urls_ready(2_500, 2_500);
        let text = output(reporter)?;
        let checks = [
            "Testing 1,234 total URLs. (12,345 listed in sitemap, 11,111 skipped by once-patterns)",
            "Testing 2,500 total URLs.",
        ];
        for expected in checks {
            if !text.contains(expected) {
                return Err(format!("Missing '{}' in:\n{}", expected, text));
            }
        }
        Ok(())
    }

    #[test]
    fn campaign_summary_lists_each_phase() -> Result<(), String> {
        let mut reporter = ConsoleReporter::new(Vec::new(), false);
        reporter.urls_ready(5, 3);
        reporter.campaign_finished(&CampaignReport {
            phases: vec![
                PhaseReport {
                    phase: Phase::Priming,
                    workers: 1,
                    urls_tested: 3,
                    urls_flagged: 0,
                    requests: 3,
                },
                PhaseReport {
                    phase: Phase::FullPower,
                    workers: 4,
                    urls_tested: 3,
                    urls_flagged: 1,
                    requests: 12,
                },
            ],
        });
        let text = output(reporter)?;
        let checks = [
            "Testing 3 total URLs. (5 listed in sitemap, 2 skipped by once-patterns)",
            "First request: 3 URLs warmed with 1 workers, 0 flagged.",
            "Full power: 3 URLs warmed with 4 workers, 1 flagged.",
            "Total requests: 15",
        ];
        for expected in checks {
            if !text.contains(expected) {
                return Err(format!("Missing '{}' in:\n{}", expected, text));
            }
        }
        Ok(())
    }
}
