use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::WarmupArgs;
use crate::args::parsers::validate_ignore_patterns;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given on the command
/// line take precedence.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut WarmupArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "ignore_patterns")
        && let Some(patterns) = config.ignore_patterns.as_ref()
    {
        validate_ignore_patterns(patterns).map_err(|err| {
            AppError::config(ConfigError::InvalidIgnorePattern { source: err })
        })?;
        args.ignore_patterns = patterns.clone();
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = timeout.to_duration().map_err(|err| {
            AppError::config(ConfigError::InvalidDuration {
                field: "timeout",
                source: err,
            })
        })?;
    }

    if !is_cli(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = timeout.to_duration().map_err(|err| {
            AppError::config(ConfigError::InvalidDuration {
                field: "connect_timeout",
                source: err,
            })
        })?;
    }

    if !is_cli(matches, "pause")
        && let Some(pause) = config.pause.as_ref()
    {
        args.pause = pause.to_duration().map_err(|err| {
            AppError::config(ConfigError::InvalidDuration {
                field: "pause",
                source: err,
            })
        })?;
    }

    if !is_explicit(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_cli(matches, "no_banner")
        && let Some(no_banner) = config.no_banner
    {
        args.no_banner = no_banner;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

// NO_COLOR from the environment also outranks the config file.
fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}
