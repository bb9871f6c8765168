//! The persisted session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::MobileNumber;

/// A locally persisted session, asserting that OTP verification succeeded
/// for the identifier.
///
/// The persisted JSON layout is a single record:
/// `{ "mobileNumber": "9876543210", "name": "...", "loggedInAt": 1712... }`
/// with `loggedInAt` in epoch milliseconds. A session exists in storage if
/// and only if a verification completed since the last logout or
/// invalidation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    mobile_number: MobileNumber,
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Create a session for a freshly verified identifier, stamping the
    /// login time with the current wall clock.
    pub fn new(mobile_number: MobileNumber, display_name: Option<String>) -> Self {
        Self {
            mobile_number,
            display_name,
            logged_in_at: Utc::now(),
        }
    }

    /// The verified phone number. Immutable once set.
    pub fn identifier(&self) -> &MobileNumber {
        &self.mobile_number
    }

    /// Optional human name returned by the identity service.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// When verification completed.
    pub fn logged_in_at(&self) -> DateTime<Utc> {
        self.logged_in_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_layout() {
        let session = Session::new(
            MobileNumber::new("9876543210").unwrap(),
            Some("A. Vendor".to_string()),
        );

        let json: serde_json::Value = serde_json::to_value(&session).unwrap();
        assert_eq!(json["mobileNumber"], "9876543210");
        assert_eq!(json["name"], "A. Vendor");
        assert!(json["loggedInAt"].is_i64());
    }

    #[test]
    fn name_field_is_optional() {
        let session = Session::new(MobileNumber::new("9876543210").unwrap(), None);

        let json: serde_json::Value = serde_json::to_value(&session).unwrap();
        assert!(json.get("name").is_none());

        let back: Session = serde_json::from_value(json).unwrap();
        assert_eq!(back.display_name(), None);
    }

    #[test]
    fn roundtrip() {
        let session = Session::new(
            MobileNumber::new("9876543210").unwrap(),
            Some("A. Vendor".to_string()),
        );

        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn login_time_is_current() {
        let before = Utc::now();
        let session = Session::new(MobileNumber::new("9876543210").unwrap(), None);
        assert!(session.logged_in_at() >= before);
        assert!(session.logged_in_at() <= Utc::now());
    }
}
