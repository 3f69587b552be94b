//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text form used for parsing and display.
pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

/// Earliest accepted birth year.
pub const MIN_YEAR: i32 = 1900;

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})-([0-9]{2})-([0-9]{4})$").expect("birthday pattern is a valid regex")
});

/// A validated birthday in `DD-MM-YYYY` form.
///
/// The year must lie in `[1900, current year]`, the month in `[1, 12]`,
/// the day in `[1, 31]`, and the date must exist in the calendar.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("01-09-1990").unwrap();
/// assert_eq!(birthday.to_string(), "01-09-1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating against the current local year.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not
    /// `DD-MM-YYYY` or any component is out of range.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::parse_as_of(raw, Local::now().year())
    }

    /// Create a new Birthday, treating `current_year` as the latest valid year.
    pub fn parse_as_of(raw: &str, current_year: i32) -> Result<Self, ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidBirthday {
            value: raw.to_string(),
            reason,
        };

        let caps = BIRTHDAY_PATTERN
            .captures(raw)
            .ok_or_else(|| invalid("expected DD-MM-YYYY".to_string()))?;

        // Digit groups are guaranteed by the pattern.
        let day: u32 = caps[1].parse().map_err(|_| invalid("bad day".to_string()))?;
        let month: u32 = caps[2].parse().map_err(|_| invalid("bad month".to_string()))?;
        let year: i32 = caps[3].parse().map_err(|_| invalid("bad year".to_string()))?;

        if !(MIN_YEAR..=current_year).contains(&year) {
            return Err(invalid(format!(
                "year must be between {} and {}",
                MIN_YEAR, current_year
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(invalid("month must be between 1 and 12".to_string()));
        }
        if !(1..=31).contains(&day) {
            return Err(invalid("day must be between 1 and 31".to_string()));
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| invalid("date does not exist".to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// `(month, day)`, the order used for birthday comparisons.
    pub fn month_day(&self) -> (u32, u32) {
        (self.0.month(), self.0.day())
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason_of(result: Result<Birthday, ValidationError>) -> String {
        match result {
            Err(ValidationError::InvalidBirthday { reason, .. }) => reason,
            other => panic!("Expected InvalidBirthday, got: {:?}", other),
        }
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("01-09-1990").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 9, 1).unwrap());
        assert_eq!(birthday.month_day(), (9, 1));
        assert_eq!(birthday.to_string(), "01-09-1990");
    }

    #[test]
    fn test_birthday_year_bounds() {
        assert!(Birthday::parse_as_of("01-01-1900", 2024).is_ok());
        assert!(Birthday::parse_as_of("31-12-2024", 2024).is_ok());
        assert!(reason_of(Birthday::parse_as_of("31-12-1899", 2024)).contains("year"));
        assert!(reason_of(Birthday::parse_as_of("01-01-2025", 2024)).contains("year"));
    }

    #[test]
    fn test_birthday_month_and_day_ranges() {
        assert!(reason_of(Birthday::parse_as_of("10-13-1990", 2024)).contains("month"));
        assert!(reason_of(Birthday::parse_as_of("10-00-1990", 2024)).contains("month"));
        assert!(reason_of(Birthday::parse_as_of("32-01-1990", 2024)).contains("day"));
        assert!(reason_of(Birthday::parse_as_of("00-01-1990", 2024)).contains("day"));
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert_eq!(
            reason_of(Birthday::parse_as_of("31-02-1990", 2024)),
            "date does not exist"
        );
        assert!(Birthday::parse_as_of("29-02-1990", 2024).is_err());
        assert!(Birthday::parse_as_of("29-02-1992", 2024).is_ok());
    }

    #[test]
    fn test_birthday_rejects_other_layouts() {
        for raw in ["1990-09-01", "1-9-1990", "01/09/1990", "01-09-90", "", "soon"] {
            assert!(Birthday::new(raw).is_err(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("01-09-1990").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"01-09-1990\"");

        let parsed: Birthday = serde_json::from_str("\"01-09-1990\"").unwrap();
        assert_eq!(parsed, birthday);
        assert!(serde_json::from_str::<Birthday>("\"31-02-1990\"").is_err());
    }
}
