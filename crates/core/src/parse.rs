//! Lenient integer parsing for form-style textual input.

/// Parses the leading decimal integer of `input`.
///
/// Leading whitespace is skipped, an optional `+`/`-` sign is accepted, and
/// the longest run of ASCII digits that follows is the value. Trailing text is
/// ignored (`"12 units"` is 12). Returns `None` when no digit follows, or when
/// the value does not fit in an `i64`.
pub fn parse_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
