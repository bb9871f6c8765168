//! Identity service trait.

use async_trait::async_trait;

use crate::types::{MobileNumber, OtpCode};
use crate::Result;

/// Outcome of dispatching (or re-dispatching) an OTP challenge.
#[derive(Debug, Clone)]
pub struct OtpDispatch {
    /// Server-declared validity window in seconds. Display-only; the
    /// client does not enforce expiry.
    pub expires_in: Option<u64>,
    /// Debug code surfaced by non-production deployments. Absent unless
    /// the client was explicitly configured to expose it.
    pub debug_code: Option<String>,
}

/// Outcome of a successful verification.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    /// The identifier as confirmed by the server, when it returns one.
    pub mobile_number: Option<MobileNumber>,
    /// Optional human name for the verified account.
    pub name: Option<String>,
}

/// The remote identity service behind the OTP challenge flow.
///
/// All three operations are single-shot request/response; none retries
/// automatically. Every retry is a distinct caller action.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Dispatch an OTP to the given number, opening a challenge.
    async fn request_code(&self, mobile_number: &MobileNumber) -> Result<OtpDispatch>;

    /// Submit a code against the open challenge for this number.
    async fn verify_code(
        &self,
        mobile_number: &MobileNumber,
        code: &OtpCode,
    ) -> Result<VerifiedIdentity>;

    /// Re-issue the challenge for this number. Refreshes the existing
    /// challenge rather than opening a second one.
    async fn resend_code(&self, mobile_number: &MobileNumber) -> Result<OtpDispatch>;
}
