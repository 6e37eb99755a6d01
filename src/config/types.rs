use std::time::Duration;

use serde::Deserialize;

use crate::error::ValidationError;

/// Settings accepted from `wakeup.toml` / `wakeup.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "once_patterns")]
    pub ignore_patterns: Option<Vec<String>>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub pause: Option<PauseValue>,
    pub no_color: Option<bool>,
    pub no_banner: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => super::parse_duration_value(text),
        }
    }
}

/// Inter-URL pause; bare numbers are milliseconds and zero is allowed.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PauseValue {
    Millis(u64),
    Text(String),
}

impl PauseValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            PauseValue::Millis(ms) => Ok(Duration::from_millis(*ms)),
            PauseValue::Text(text) => super::parse_pause_value(text),
        }
    }
}
