/// Milliseconds with two decimals and `,` thousands separators, e.g. `1,234.57`.
pub(crate) fn format_ms(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!("{}{}.{}", sign, group_thousands(whole), frac)
}

pub(crate) fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len().saturating_add(digits.len() / 3));
    let lead = digits.len() % 3;
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && idx >= lead && (idx.saturating_sub(lead)) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
