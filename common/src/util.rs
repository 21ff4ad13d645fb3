use crate::Timestamp;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn get_current_time() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or_default()
}

/// Seconds since the unix epoch, with sub-second precision.
pub fn get_current_time_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs_f64())
        .unwrap_or_default()
}

/// Returns the input if it is non-empty and made of ASCII decimal digits only.
/// Signs, decimal points and surrounding whitespace are rejected.
pub fn digits_only(input: &str) -> Option<&str> {
    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        Some(input)
    } else {
        None
    }
}

/// Case-insensitive `true`/`false` after trimming whitespace.
pub fn parse_bool_text(input: &str) -> Option<bool> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[test]
fn test_digits_only() {
    assert_eq!(digits_only("150"), Some("150"));
    assert_eq!(digits_only("007"), Some("007"));
    assert_eq!(digits_only(""), None);
    assert_eq!(digits_only("-5"), None);
    assert_eq!(digits_only("1.5"), None);
    assert_eq!(digits_only(" 12"), None);
    assert_eq!(digits_only("abc"), None);
}

#[test]
fn test_parse_bool_text() {
    assert_eq!(parse_bool_text("TRUE"), Some(true));
    assert_eq!(parse_bool_text(" false\n"), Some(false));
    assert_eq!(parse_bool_text("yes"), None);
    assert_eq!(parse_bool_text(""), None);
}

#[test]
fn test_current_time_units() {
    let millis = get_current_time();
    let secs = get_current_time_secs();
    assert!(millis > 1_600_000_000_000);
    assert!(secs > 1_600_000_000.0 && secs < 1_000_000_000_000.0);
}
