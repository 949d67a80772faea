use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Typed view of a single record field as seen by the grid engine.
///
/// Enumerations are exposed as `Text` carrying their code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(DateTime<Utc>),
}

impl<'a> FieldValue<'a> {
    /// Natural three-way ordering: lexicographic, numeric or chronological.
    /// Numbers use the IEEE total order, so NaN sorts after every finite value.
    /// Values of different kinds compare as equal.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }

    /// Exact equality against a filter value coming from a selector.
    pub fn matches_exact(&self, expected: &str) -> bool {
        match self {
            FieldValue::Text(value) => *value == expected,
            FieldValue::Number(value) => expected
                .trim()
                .parse::<f64>()
                .map(|parsed| parsed == *value)
                .unwrap_or(false),
            FieldValue::Date(value) => DateTime::parse_from_rfc3339(expected.trim())
                .map(|parsed| parsed.with_timezone(&Utc) == *value)
                .unwrap_or(false),
        }
    }

    pub fn as_text(&self) -> Cow<'a, str> {
        match self {
            FieldValue::Text(value) => Cow::Borrowed(*value),
            FieldValue::Number(value) => Cow::Owned(value.to_string()),
            FieldValue::Date(value) => Cow::Owned(value.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_text_is_lexicographic() {
        assert_eq!(
            FieldValue::Text("London HQ").compare(&FieldValue::Text("Toronto Hub")),
            Ordering::Less
        );
        // Byte order, upper case sorts before lower case
        assert_eq!(
            FieldValue::Text("Zed").compare(&FieldValue::Text("abc")),
            Ordering::Less
        );
    }

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(
            FieldValue::Number(9.5).compare(&FieldValue::Number(100.0)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Number(f64::NAN).compare(&FieldValue::Number(1.0)),
            Ordering::Greater
        );
        assert_eq!(
            FieldValue::Number(f64::NAN).compare(&FieldValue::Number(f64::NAN)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_dates_compare_chronologically() {
        let early = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(
            FieldValue::Date(late).compare(&FieldValue::Date(early)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_exact_match() {
        assert!(FieldValue::Text("Completed").matches_exact("Completed"));
        assert!(!FieldValue::Text("Completed").matches_exact("complete"));
        assert!(FieldValue::Number(42.5).matches_exact("42.5"));
        assert!(!FieldValue::Number(42.5).matches_exact("abc"));
    }
}
