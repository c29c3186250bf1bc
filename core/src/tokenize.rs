//! Delimiter splitting and permissive number conversion for flag payloads.

use tracing::debug;

/// Splits `input` on every `delimiter`, dropping empty segments.
///
/// # Examples
///
/// ```
/// use flagscan_core::split;
///
/// assert_eq!(split("1,,2,", ','), vec!["1", "2"]);
/// assert!(split("", ',').is_empty());
/// ```
pub fn split(input: &str, delimiter: char) -> Vec<String> {
    input
        .split(delimiter)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Converts one payload segment to an integer, never failing.
///
/// Leading whitespace and a single `+`/`-` sign are accepted, then decimal
/// digits are read up to the first non-digit. A segment without digits
/// yields `0`; out-of-range values saturate.
///
/// # Examples
///
/// ```
/// use flagscan_core::parse_number;
///
/// assert_eq!(parse_number("42"), 42);
/// assert_eq!(parse_number(" -7"), -7);
/// assert_eq!(parse_number("12abc"), 12);
/// assert_eq!(parse_number("abc"), 0);
/// ```
pub fn parse_number(segment: &str) -> i32 {
    let trimmed = segment.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    // One past i32::MAX so that i32::MIN is still reachable after negation.
    let limit = i64::from(i32::MAX) + 1;
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| (acc * 10 + i64::from(b - b'0')).min(limit));

    let value = if negative { -magnitude } else { magnitude };
    let value = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;

    if segment.parse::<i32>().is_err() {
        debug!(segment, value, "lenient number conversion");
    }
    value
}

/// Parses a comma-separated payload such as `1,2,3`.
///
/// # Examples
///
/// ```
/// use flagscan_core::parse_numbers;
///
/// assert_eq!(parse_numbers("1,2,3"), vec![1, 2, 3]);
/// assert_eq!(parse_numbers("5,x"), vec![5, 0]);
/// ```
pub fn parse_numbers(payload: &str) -> Vec<i32> {
    split(payload, ',')
        .iter()
        .map(|segment| parse_number(segment))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_drops_empty_segments() {
        assert_eq!(split(",a,,b,,", ','), vec!["a", "b"]);
        assert!(split(",,,", ',').is_empty());
        assert!(split("", ',').is_empty());
    }

    #[test]
    fn test_split_without_delimiter() {
        assert_eq!(split("abc", ','), vec!["abc"]);
    }

    #[test]
    fn test_parse_number_signs_and_whitespace() {
        assert_eq!(parse_number("+15"), 15);
        assert_eq!(parse_number("\t-3"), -3);
        assert_eq!(parse_number("-"), 0);
        assert_eq!(parse_number("- 3"), 0);
    }

    #[test]
    fn test_parse_number_saturates() {
        assert_eq!(parse_number("99999999999"), i32::MAX);
        assert_eq!(parse_number("-99999999999"), i32::MIN);
        assert_eq!(parse_number("-2147483648"), i32::MIN);
        assert_eq!(parse_number("2147483647"), i32::MAX);
    }

    #[test]
    fn test_parse_numbers_keeps_order() {
        assert_eq!(parse_numbers("3,1,2"), vec![3, 1, 2]);
        assert_eq!(parse_numbers("4,,5"), vec![4, 5]);
        assert!(parse_numbers("").is_empty());
    }
}
