use std::time::Duration;

use crate::error::ValidationError;

pub(crate) fn parse_duration_value(value: &str) -> Result<Duration, ValidationError> {
    let duration = parse_duration_any(value, "s")?;
    if duration.as_millis() == 0 {
        return Err(ValidationError::DurationZero);
    }
    Ok(duration)
}

/// Inter-URL pause. Zero disables it and a bare number is milliseconds, the
/// same as a bare `pause` in the config file.
pub(crate) fn parse_pause_value(value: &str) -> Result<Duration, ValidationError> {
    parse_duration_any(value, "ms")
}

fn parse_duration_any(value: &str, bare_unit: &'static str) -> Result<Duration, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let mut digits_len = 0usize;
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            digits_len = digits_len.saturating_add(1);
        } else {
            break;
        }
    }
    if digits_len == 0 {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part
        .parse()
        .map_err(|err| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })?;

    let unit = if unit_part.is_empty() { bare_unit } else { unit_part };
    match unit {
        "ms" => Ok(Duration::from_millis(number)),
        "s" => Ok(Duration::from_secs(number)),
        "m" => {
            let secs = number
                .checked_mul(60)
                .ok_or(ValidationError::DurationOverflow)?;
            Ok(Duration::from_secs(secs))
        }
        "h" => {
            let secs = number
                .checked_mul(60)
                .and_then(|seconds| seconds.checked_mul(60))
                .ok_or(ValidationError::DurationOverflow)?;
            Ok(Duration::from_secs(secs))
        }
        _ => Err(ValidationError::InvalidDurationUnit {
            unit: unit.to_owned(),
        }),
    }
}
