#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(duration) = wakeup::fuzzing::parse_duration_value_input(input) {
            debug_assert!(duration.as_millis() > 0);
        }
        let pause = wakeup::fuzzing::parse_pause_value_input(input);
        if wakeup::fuzzing::parse_duration_value_input(input).is_ok() {
            debug_assert!(pause.is_ok());
        }
    }
});
