#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(urls) = wakeup::fuzzing::extract_urls_input(input) {
            for url in &urls {
                debug_assert!(!url.is_empty());
                debug_assert_eq!(url.trim(), url.as_str());
            }
        }
    }
});
