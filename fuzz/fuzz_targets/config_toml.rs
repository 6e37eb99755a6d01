#![no_main]

use libfuzzer_sys::fuzz_target;
use wakeup::config::types::{ConfigFile, DurationValue};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let parsed: Option<ConfigFile> = toml::from_str(input).ok();
        let applied = wakeup::fuzzing::apply_config_from_toml(input);
        if applied.is_ok() {
            if let Some(config) = parsed {
                if let Some(DurationValue::Seconds(secs)) = config.timeout {
                    debug_assert!(secs > 0);
                }
                if let Some(patterns) = config.ignore_patterns {
                    debug_assert!(patterns.iter().all(|pattern| !pattern.is_empty()));
                }
            }
        }
    }
});
