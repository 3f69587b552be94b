//! Phone value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Exact length of every accepted phone number.
pub const PHONE_LENGTH: usize = 17;

/// `+380(DD)DDD-D{1,2}-D{2,3}`; ASCII digits only.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+380\([0-9]{2}\)[0-9]{3}-[0-9]{1,2}-[0-9]{2,3}$")
        .expect("phone pattern is a valid regex")
});

/// A validated Ukrainian phone number.
///
/// Accepted forms are `+380(DD)DDD-DD-DD` and `+380(DD)DDD-D-DDD`,
/// always exactly 17 characters long. The value is stored verbatim.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("+380(67)777-77-77").unwrap();
/// assert_eq!(phone.as_str(), "+380(67)777-77-77");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must match `+380(DD)DDD-D{1,2}-D{2,3}`
    /// - Must be exactly 17 characters long
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if either rule fails.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        phone.len() == PHONE_LENGTH && PHONE_PATTERN.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
