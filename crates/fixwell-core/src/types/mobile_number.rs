//! Mobile number type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated 10-digit mobile number.
///
/// Construction strips every non-digit character (spaces, dashes,
/// parentheses) and then requires exactly 10 digits to remain, so user
/// input like `"98765-43210"` normalizes to `"9876543210"`. Once built the
/// number is immutable.
///
/// # Example
///
/// ```
/// use fixwell_core::MobileNumber;
///
/// let number = MobileNumber::new("(987) 654-3210").unwrap();
/// assert_eq!(number.as_str(), "9876543210");
/// assert!(MobileNumber::new("12345").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Create a new mobile number from raw input, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer or more than 10 digits remain after
    /// stripping non-digit characters.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let raw = s.as_ref();
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() != 10 {
            return Err(InvalidInputError::MobileNumber {
                value: raw.to_string(),
                reason: format!("expected 10 digits, found {}", digits.len()),
            }
            .into());
        }

        Ok(Self(digits))
    }

    /// Returns the normalized 10-digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MobileNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for MobileNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MobileNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        MobileNumber::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for MobileNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
