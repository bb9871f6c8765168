//! Admin API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL for the admin API.
///
/// Must be an absolute HTTPS URL; plain HTTP is accepted for localhost only
/// so tests can run against a loopback mock server.
///
/// # Example
///
/// ```
/// use fixwell_core::ServiceUrl;
///
/// let base = ServiceUrl::new("https://api.fixwell.app").unwrap();
/// assert_eq!(base.endpoint("/admin/auth/login"),
///            "https://api.fixwell.app/admin/auth/login");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceUrl(Url);

impl ServiceUrl {
    /// Create a new service URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute, has no host, or uses a
    /// scheme other than HTTPS (HTTP for localhost).
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ServiceUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the full URL for an API path (leading slash expected).
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}{}", base, path)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        let scheme = url.scheme();
        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServiceUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ServiceUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ServiceUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ServiceUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
