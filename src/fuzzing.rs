use std::path::Path;
use std::time::Duration;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::WarmupArgs;
use crate::config::types::ConfigFile;
use crate::config::{apply_config, parse_duration_value, parse_pause_value};
use crate::error::{AppError, AppResult, ConfigError};

thread_local! {
    static BASE_MATCHES: ArgMatches = WarmupArgs::command()
        .get_matches_from(["wakeup", "https://fuzz.test/sitemap.xml", "1"]);
}

/// Parses a duration value (e.g. `10s`, `500ms`); zero is rejected.
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_value_input(input: &str) -> AppResult<Duration> {
    parse_duration_value(input).map_err(AppError::from)
}

/// Parses a pause value; zero is accepted.
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_pause_value_input(input: &str) -> AppResult<Duration> {
    parse_pause_value(input).map_err(AppError::from)
}

/// Extracts sitemap locations from an arbitrary document.
///
/// # Errors
///
/// Returns an error when the document is not a well-formed `urlset`.
pub fn extract_urls_input(document: &str) -> AppResult<Vec<String>> {
    crate::sitemap::extract_urls(document).map_err(AppError::from)
}

/// Runs the once-pattern filter over arbitrary input.
#[must_use]
pub fn filter_once_input(urls: &[String], patterns: &[String]) -> Vec<String> {
    crate::sitemap::filter_once(urls, patterns)
}

/// Parses TOML config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_toml(input: &str) -> AppResult<()> {
    let config: ConfigFile = toml::from_str(input).map_err(|err| {
        AppError::config(ConfigError::ParseToml {
            path: Path::new("fuzz.toml").to_path_buf(),
            source: err,
        })
    })?;
    apply_config_to_defaults(&config)
}

/// Parses JSON config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_json(input: &[u8]) -> AppResult<()> {
    let config: ConfigFile = serde_json::from_slice(input).map_err(|err| {
        AppError::config(ConfigError::ParseJson {
            path: Path::new("fuzz.json").to_path_buf(),
            source: err,
        })
    })?;
    apply_config_to_defaults(&config)
}

/// Loads a config file from disk to exercise extension handling.
///
/// # Errors
///
/// Returns an error when the config file cannot be read or parsed.
pub fn load_config_file_input(path: &Path) -> AppResult<()> {
    crate::config::load_config_file(path).map(|_| ())
}

fn apply_config_to_defaults(config: &ConfigFile) -> AppResult<()> {
    BASE_MATCHES.with(|matches| {
        let mut args = WarmupArgs::from_arg_matches(matches)?;
        apply_config(&mut args, matches, config)
    })
}
