//! Validated domain types.

mod mobile_number;
mod otp_code;
mod service_url;

pub use mobile_number::MobileNumber;
pub use otp_code::OtpCode;
pub use service_url::ServiceUrl;
