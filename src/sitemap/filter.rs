use std::collections::HashMap;

/// Which once-patterns have already let a representative URL through.
#[derive(Debug, Default)]
struct OnceSeen<'p> {
    consumed: HashMap<&'p str, bool>,
}

impl<'p> OnceSeen<'p> {
    fn is_consumed(&self, pattern: &str) -> bool {
        self.consumed.get(pattern).copied().unwrap_or(false)
    }

    fn consume(&mut self, pattern: &'p str) {
        self.consumed.insert(pattern, true);
    }
}

/// Keeps the first URL of every once-pattern bucket and every URL that
/// matches no pattern, in input order.
///
/// A URL belongs to the bucket of the first pattern, in list order, that is a
/// substring of it. An empty pattern list keeps everything.
#[must_use]
pub fn filter_once<S>(urls: &[String], patterns: &[S]) -> Vec<String>
where
    S: AsRef<str>,
{
    let mut seen = OnceSeen::default();
    let mut filtered = Vec::with_capacity(urls.len());

    for url in urls {
        let matching = patterns
            .iter()
            .map(|pattern| pattern.as_ref())
            .find(|pattern| url.contains(*pattern));

        match matching {
            None => filtered.push(url.clone()),
            Some(pattern) => {
                if !seen.is_consumed(pattern) {
                    filtered.push(url.clone());
                }
                seen.consume(pattern);
            }
        }
    }

    filtered
}
