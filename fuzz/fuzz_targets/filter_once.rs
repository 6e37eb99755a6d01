#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let (urls_part, patterns_part) = input.split_once('\n').unwrap_or((input.as_ref(), ""));
    let urls: Vec<String> = urls_part.split(' ').take(256).map(str::to_owned).collect();
    let patterns: Vec<String> = patterns_part
        .split(' ')
        .filter(|pattern| !pattern.is_empty())
        .take(16)
        .map(str::to_owned)
        .collect();

    let filtered = wakeup::fuzzing::filter_once_input(&urls, &patterns);
    debug_assert!(filtered.len() <= urls.len());

    let mut remaining = urls.iter();
    debug_assert!(filtered
        .iter()
        .all(|kept| remaining.by_ref().any(|candidate| candidate == kept)));

    for pattern in &patterns {
        let owned = filtered
            .iter()
            .filter(|url| patterns.iter().find(|candidate| url.contains(candidate.as_str())) == Some(pattern))
            .count();
        debug_assert!(owned <= 1);
    }
});
