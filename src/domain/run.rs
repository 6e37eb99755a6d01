use std::time::Duration;

use url::Url;

use crate::args::parsers::validate_ignore_patterns;
use crate::args::{PositiveUsize, WarmupArgs};
use crate::error::{AppError, AppResult, HttpError};
use crate::http::{ClientSettings, UserAgent};

/// Fully resolved settings for one warm-up run, after CLI and config have
/// been merged and validated.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub sitemap_url: String,
    /// Host (plus explicit port) shown in the header.
    pub domain: String,
    pub workers: PositiveUsize,
    pub ignore_patterns: Vec<String>,
    pub client: ClientSettings,
    pub pause: Duration,
    pub no_color: bool,
    pub no_banner: bool,
}

impl RunSettings {
    /// # Errors
    ///
    /// Returns an error when the sitemap URL is not an absolute http(s) URL
    /// or an ignore pattern is empty.
    pub fn from_args(args: &WarmupArgs, user_agent: UserAgent) -> AppResult<Self> {
        let domain = sitemap_domain(&args.sitemap_url)?;
        validate_ignore_patterns(&args.ignore_patterns).map_err(AppError::validation)?;

        Ok(Self {
            sitemap_url: args.sitemap_url.clone(),
            domain,
            workers: args.workers,
            ignore_patterns: args.ignore_patterns.clone(),
            client: ClientSettings::new(user_agent, args.request_timeout, args.connect_timeout),
            pause: args.pause,
            no_color: args.no_color,
            no_banner: args.no_banner,
        })
    }
}

fn sitemap_domain(sitemap_url: &str) -> Result<String, HttpError> {
    let parsed = Url::parse(sitemap_url).map_err(|err| HttpError::InvalidUrl {
        url: sitemap_url.to_owned(),
        source: err,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(HttpError::UnsupportedScheme {
            url: sitemap_url.to_owned(),
            scheme: parsed.scheme().to_owned(),
        });
    }
    let host = parsed.host_str().ok_or_else(|| HttpError::MissingHost {
        url: sitemap_url.to_owned(),
    })?;
    Ok(parsed
        .port()
        .map_or_else(|| host.to_owned(), |port| format!("{}:{}", host, port)))
}
