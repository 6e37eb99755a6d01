use std::time::Duration;

use super::types::PositiveUsize;
use crate::config::{parse_duration_value, parse_pause_value};
use crate::error::{AppError, AppResult, ValidationError};

pub(super) fn parse_positive_usize(s: &str) -> AppResult<PositiveUsize> {
    s.parse::<PositiveUsize>().map_err(AppError::from)
}

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}

pub(crate) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    parse_duration_value(s).map_err(AppError::from)
}

pub(crate) fn parse_pause_arg(s: &str) -> AppResult<Duration> {
    parse_pause_value(s).map_err(AppError::from)
}

/// Rejects empty patterns; an empty substring would collapse every URL into one bucket.
pub(crate) fn validate_ignore_patterns(patterns: &[String]) -> Result<(), ValidationError> {
    if patterns.iter().any(|pattern| pattern.is_empty()) {
        return Err(ValidationError::EmptyIgnorePattern);
    }
    Ok(())
}
