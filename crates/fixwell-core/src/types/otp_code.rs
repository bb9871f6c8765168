//! One-time passcode type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated 6-digit one-time passcode.
///
/// Surrounding whitespace is trimmed; the remainder must be exactly six
/// ASCII digits. The shape check happens here, before any network call
/// exists to waste.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OtpCode(String);

impl OtpCode {
    /// Create a new OTP from raw input, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error unless the trimmed input is exactly 6 digits.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let raw = s.as_ref().trim();

        if raw.len() != 6 || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(InvalidInputError::OtpCode {
                value: s.as_ref().to_string(),
                reason: "must be exactly 6 digits".to_string(),
            }
            .into());
        }

        Ok(Self(raw.to_string()))
    }

    /// Returns the 6-digit code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// One-time codes stay out of logs.
impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OtpCode([REDACTED])")
    }
}

impl FromStr for OtpCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for OtpCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OtpCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        OtpCode::new(&s).map_err(serde::de::Error::custom)
    }
}
