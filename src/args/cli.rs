use clap::Parser;
use std::time::Duration;

use super::parsers::{parse_bool_env, parse_duration_arg, parse_pause_arg, parse_positive_usize};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Site warm-up: request every page listed in a sitemap with a burst of concurrent workers."
)]
pub struct WarmupArgs {
    /// Url for the sitemap, e.g. https://site.com/sitemap.xml
    #[arg(value_name = "SITEMAP_URL")]
    pub sitemap_url: String,

    /// Number of workers (concurrent requests per URL in the full power phase)
    #[arg(value_name = "WORKERS", value_parser = parse_positive_usize)]
    pub workers: PositiveUsize,

    /// Substrings for URLs to only request once (zero or more)
    #[arg(value_name = "IGNORE_PATTERNS", num_args = 0..)]
    pub ignore_patterns: Vec<String>,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = "30s",
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// Connect timeout (supports ms/s/m/h)
    #[arg(
        long = "connect-timeout",
        default_value = "10s",
        value_parser = parse_duration_arg
    )]
    pub connect_timeout: Duration,

    /// Pause after each URL (supports ms/s/m/h, bare numbers are milliseconds, 0 disables)
    #[arg(long = "pause", default_value = "50ms", value_parser = parse_pause_arg)]
    pub pause: Duration,

    /// Skip the header box
    #[arg(long = "no-banner")]
    pub no_banner: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by WAKEUP_LOG/RUST_LOG)
    #[arg(long, short = 'v', alias = "debug")]
    pub verbose: bool,

    /// Path to config file (TOML/JSON). Defaults to ./wakeup.toml or ./wakeup.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
