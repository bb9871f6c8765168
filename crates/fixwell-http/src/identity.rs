//! HTTP-backed identity service.

use async_trait::async_trait;
use tracing::{debug, instrument};

use fixwell_core::traits::{IdentityService, OtpDispatch, VerifiedIdentity};
use fixwell_core::{MobileNumber, OtpCode, Result, ServiceUrl};

use crate::client::ApiClient;

/// Endpoint for opening an OTP challenge.
const REQUEST_OTP: &str = "/admin/auth/login";

/// Endpoint for verifying a submitted code.
const VERIFY_OTP: &str = "/admin/auth/verify-otp";

/// Endpoint for re-issuing an open challenge.
const RESEND_OTP: &str = "/admin/auth/resend-otp";

/// Request body for requestCode and resendCode.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ChallengeRequest<'a> {
    mobile_number: &'a str,
}

/// Response from requestCode and resendCode.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChallengeResponse {
    expires_in_seconds: Option<u64>,
    /// Debug code included by non-production deployments.
    otp: Option<String>,
}

/// Request body for verifyCode.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyRequest<'a> {
    mobile_number: &'a str,
    otp: &'a str,
}

/// Response from verifyCode.
#[derive(Debug, serde::Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    data: Option<VerifiedData>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerifiedData {
    mobile_number: Option<String>,
    name: Option<String>,
}

/// A network-backed [`IdentityService`] over the admin API.
///
/// Stateless request/response wrapper: the challenge itself lives on the
/// server and in the caller's flow, never here.
#[derive(Debug, Clone)]
pub struct HttpIdentityService {
    client: ApiClient,
    surface_debug_codes: bool,
}

impl HttpIdentityService {
    /// Create a new identity service client for the given API base URL.
    ///
    /// Debug codes are dropped by default; the server is not trusted to
    /// omit them in production responses.
    pub fn new(base: ServiceUrl) -> Self {
        Self {
            client: ApiClient::new(base),
            surface_debug_codes: false,
        }
    }

    /// Opt into surfacing server-issued debug codes. Non-production only.
    pub fn with_debug_codes(mut self, enabled: bool) -> Self {
        self.surface_debug_codes = enabled;
        self
    }

    fn dispatch(&self, response: ChallengeResponse) -> OtpDispatch {
        OtpDispatch {
            expires_in: response.expires_in_seconds,
            debug_code: if self.surface_debug_codes {
                response.otp
            } else {
                None
            },
        }
    }
}

#[async_trait]
impl IdentityService for HttpIdentityService {
    #[instrument(skip(self))]
    async fn request_code(&self, mobile_number: &MobileNumber) -> Result<OtpDispatch> {
        debug!(mobile = %mobile_number, "requesting OTP");

        let request = ChallengeRequest {
            mobile_number: mobile_number.as_str(),
        };
        let response: ChallengeResponse = self.client.procedure(REQUEST_OTP, &request).await?;

        Ok(self.dispatch(response))
    }

    #[instrument(skip(self, code))]
    async fn verify_code(
        &self,
        mobile_number: &MobileNumber,
        code: &OtpCode,
    ) -> Result<VerifiedIdentity> {
        debug!(mobile = %mobile_number, "verifying OTP");

        let request = VerifyRequest {
            mobile_number: mobile_number.as_str(),
            otp: code.as_str(),
        };
        let response: VerifyResponse = self.client.procedure(VERIFY_OTP, &request).await?;

        let data = response.data;
        Ok(VerifiedIdentity {
            // A server identifier that fails the 10-digit shape is ignored
            // in favor of the submitted number.
            mobile_number: data
                .as_ref()
                .and_then(|d| d.mobile_number.as_deref())
                .and_then(|n| MobileNumber::new(n).ok()),
            name: data.and_then(|d| d.name),
        })
    }

    #[instrument(skip(self))]
    async fn resend_code(&self, mobile_number: &MobileNumber) -> Result<OtpDispatch> {
        debug!(mobile = %mobile_number, "re-requesting OTP");

        let request = ChallengeRequest {
            mobile_number: mobile_number.as_str(),
        };
        let response: ChallengeResponse = self.client.procedure(RESEND_OTP, &request).await?;

        Ok(self.dispatch(response))
    }
}
