/// Coerces free-form amount text into a number.
///
/// Keeps only ASCII digits and `.`, then reads the longest leading `digits[.digits]`
/// run, so `"$250,000"` becomes `250000.0` and `"12.5.7"` becomes `12.5`.
/// Text with no usable digits becomes `0.0`.
pub fn sanitize_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric_prefix(&cleaned).parse().unwrap_or(0.0)
}

fn numeric_prefix(cleaned: &str) -> &str {
    let mut seen_dot = false;
    let end = cleaned
        .char_indices()
        .find(|&(_, c)| {
            if c != '.' {
                return false;
            }
            if seen_dot {
                return true;
            }
            seen_dot = true;
            false
        })
        .map_or(cleaned.len(), |(i, _)| i);
    &cleaned[..end]
}
