//! Validity-date normalization.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static GERMAN_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid date regex"));

/// Converts a `DD.MM.YYYY` date to `YYYY-MM-DD`.
///
/// Anything else, including impossible calendar dates such as `31.02.2025`,
/// is returned verbatim. Absent input stays absent.
#[must_use]
pub fn normalize_date(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    if !GERMAN_DATE_RE.is_match(raw) {
        return Some(raw.to_owned());
    }
    match NaiveDate::parse_from_str(raw, "%d.%m.%Y") {
        Ok(date) => Some(date.format("%Y-%m-%d").to_string()),
        Err(e) => {
            tracing::debug!(raw, error = %e, "keeping unparsable date as-is");
            Some(raw.to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_german_date() {
        assert_eq!(
            normalize_date(Some("01.03.2025")).as_deref(),
            Some("2025-03-01")
        );
    }

    #[test]
    fn absent_stays_absent() {
        assert_eq!(normalize_date(None), None);
    }

    #[test]
    fn non_date_text_is_preserved() {
        assert_eq!(normalize_date(Some("March")).as_deref(), Some("March"));
        assert_eq!(normalize_date(Some("")).as_deref(), Some(""));
    }

    #[test]
    fn single_digit_fields_are_preserved() {
        assert_eq!(normalize_date(Some("1.3.2025")).as_deref(), Some("1.3.2025"));
    }

    #[test]
    fn impossible_calendar_date_is_preserved() {
        assert_eq!(
            normalize_date(Some("31.02.2025")).as_deref(),
            Some("31.02.2025")
        );
    }

    #[test]
    fn surrounding_text_is_preserved() {
        assert_eq!(
            normalize_date(Some("ab 01.03.2025")).as_deref(),
            Some("ab 01.03.2025")
        );
    }
}
