#![no_main]

use libfuzzer_sys::fuzz_target;
use wakeup::config::types::ConfigFile;

fuzz_target!(|data: &[u8]| {
    let parsed: Option<ConfigFile> = serde_json::from_slice(data).ok();
    let applied = wakeup::fuzzing::apply_config_from_json(data);
    if applied.is_ok() {
        if let Some(patterns) = parsed.and_then(|config| config.ignore_patterns) {
            debug_assert!(patterns.iter().all(|pattern| !pattern.is_empty()));
        }
    }
});
