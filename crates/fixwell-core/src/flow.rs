//! Login flow state machine.
//!
//! Orchestrates the multi-step login sequence: phone entry, OTP request,
//! verification, session creation. Failures return control to the prior
//! input state; the flow never advances silently.

use tracing::{debug, warn};

use crate::Result;
use crate::error::{Error, InvalidInputError};
use crate::session::Session;
use crate::traits::{IdentityService, SessionStore};
use crate::types::{MobileNumber, OtpCode};

/// The transient challenge carried between the phone and code steps.
///
/// Lives only in flow memory, never in persisted storage. Exactly one
/// challenge becomes exactly one session; no other path creates a session.
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    mobile_number: MobileNumber,
    expires_in: Option<u64>,
    debug_code: Option<String>,
}

impl OtpChallenge {
    /// The subject of the challenge. Does not change mid-flow.
    pub fn mobile_number(&self) -> &MobileNumber {
        &self.mobile_number
    }

    /// Server-declared validity window in seconds, when declared.
    pub fn expires_in(&self) -> Option<u64> {
        self.expires_in
    }

    /// Debug code surfaced by non-production deployments.
    pub fn debug_code(&self) -> Option<&str> {
        self.debug_code.as_deref()
    }
}

/// Where the login sequence currently stands.
#[derive(Debug)]
pub enum FlowState {
    /// Waiting for a phone number.
    EnteringPhone,
    /// An OTP was dispatched; waiting for the code.
    OtpRequested { challenge: OtpChallenge },
    /// A verify call is outstanding. No second verify may fire.
    Verifying { challenge: OtpChallenge },
    /// Verification succeeded and the session is persisted.
    Authenticated { session: Session },
}

/// The login flow controller, generic over its injected collaborators.
///
/// Single-threaded and event-driven: each network call is an awaited
/// suspension point, and `&mut self` plus the [`FlowState::Verifying`]
/// guard keep at most one request, verify, or resend in flight per
/// challenge. Dropping an in-flight future cancels the call; its response
/// is never applied, and [`SessionFlow::cancel`] recovers the flow.
pub struct SessionFlow<I, S> {
    identity: I,
    store: S,
    state: FlowState,
    resend_in_flight: bool,
}

impl<I, S> SessionFlow<I, S>
where
    I: IdentityService,
    S: SessionStore,
{
    /// Create a flow over the given identity service and session store.
    ///
    /// Consults the store on entry: an operator with a valid persisted
    /// session starts in [`FlowState::Authenticated`] instead of being
    /// re-prompted for a phone number.
    pub fn new(identity: I, store: S) -> Self {
        let state = match store.load() {
            Ok(Some(session)) => {
                debug!(mobile = %session.identifier(), "resuming persisted session");
                FlowState::Authenticated { session }
            }
            Ok(None) => FlowState::EnteringPhone,
            Err(err) => {
                warn!(%err, "session store unreadable, starting signed out");
                FlowState::EnteringPhone
            }
        };

        Self {
            identity,
            store,
            state,
            resend_in_flight: false,
        }
    }

    /// The current flow state.
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// True once the flow has reached [`FlowState::Authenticated`].
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, FlowState::Authenticated { .. })
    }

    /// Submit a phone number, dispatching an OTP on success.
    ///
    /// The input is normalized by [`MobileNumber::new`] (strip non-digits,
    /// require exactly 10); a malformed number fails here with no network
    /// call issued. A remote or transport failure leaves the flow at phone
    /// entry with the message surfaced to the caller.
    pub async fn submit_phone(&mut self, raw: &str) -> Result<OtpChallenge> {
        match self.state {
            FlowState::EnteringPhone => {}
            FlowState::OtpRequested { .. } | FlowState::Verifying { .. } => {
                return Err(step_guard("a code was already requested for this login"));
            }
            FlowState::Authenticated { .. } => return Err(step_guard("already signed in")),
        }

        let mobile_number = MobileNumber::new(raw)?;
        let dispatch = self.identity.request_code(&mobile_number).await?;

        debug!(mobile = %mobile_number, "OTP dispatched, awaiting code");
        let challenge = OtpChallenge {
            mobile_number,
            expires_in: dispatch.expires_in,
            debug_code: dispatch.debug_code,
        };
        self.state = FlowState::OtpRequested {
            challenge: challenge.clone(),
        };
        Ok(challenge)
    }

    /// Submit an OTP against the open challenge.
    ///
    /// The 6-digit shape check runs before any network call. While the
    /// verify call is outstanding the flow sits in
    /// [`FlowState::Verifying`] and rejects further submissions. On
    /// rejection the same challenge remains usable; on success the session
    /// is saved and the flow is authenticated.
    pub async fn submit_code(&mut self, raw: &str) -> Result<Session> {
        let challenge = match &self.state {
            FlowState::OtpRequested { challenge } => challenge.clone(),
            FlowState::Verifying { .. } => {
                return Err(step_guard("a verification is already in progress"));
            }
            FlowState::EnteringPhone => {
                return Err(step_guard("no code has been requested yet"));
            }
            FlowState::Authenticated { .. } => return Err(step_guard("already signed in")),
        };

        let code = OtpCode::new(raw)?;

        let submitted = challenge.mobile_number.clone();
        self.state = FlowState::Verifying {
            challenge: challenge.clone(),
        };

        match self.identity.verify_code(&submitted, &code).await {
            Ok(verified) => {
                let identifier = verified.mobile_number.unwrap_or(submitted);
                let session = Session::new(identifier, verified.name);
                match self.store.save(&session) {
                    Ok(()) => {
                        debug!(mobile = %session.identifier(), "session established");
                        self.state = FlowState::Authenticated {
                            session: session.clone(),
                        };
                        self.resend_in_flight = false;
                        Ok(session)
                    }
                    Err(err) => {
                        // The code was consumed server-side but nothing was
                        // persisted; hand control back to the code step.
                        self.state = FlowState::OtpRequested { challenge };
                        Err(err)
                    }
                }
            }
            Err(err) => {
                self.state = FlowState::OtpRequested { challenge };
                Err(err)
            }
        }
    }

    /// Re-issue the open challenge.
    ///
    /// At most one resend is in flight at a time. Refreshes the expiry and
    /// debug metadata of the existing challenge; the subject phone number
    /// never changes and the flow state does not transition.
    pub async fn resend(&mut self) -> Result<OtpChallenge> {
        let mobile_number = match &self.state {
            FlowState::OtpRequested { challenge } => challenge.mobile_number.clone(),
            FlowState::Verifying { .. } => {
                return Err(step_guard("a verification is already in progress"));
            }
            _ => return Err(step_guard("no code has been requested yet")),
        };

        if self.resend_in_flight {
            return Err(step_guard("a re-send is already in progress"));
        }

        self.resend_in_flight = true;
        let outcome = self.identity.resend_code(&mobile_number).await;
        self.resend_in_flight = false;

        let dispatch = outcome?;
        debug!(mobile = %mobile_number, "OTP re-dispatched");
        let challenge = OtpChallenge {
            mobile_number,
            expires_in: dispatch.expires_in,
            debug_code: dispatch.debug_code,
        };
        self.state = FlowState::OtpRequested {
            challenge: challenge.clone(),
        };
        Ok(challenge)
    }

    /// Discard a pending challenge, returning to phone entry.
    ///
    /// The navigation-away path: any challenge state is dropped, and a
    /// response from a call that was in flight at the time has nowhere to
    /// land. Does nothing to an authenticated session.
    pub fn cancel(&mut self) {
        if matches!(
            self.state,
            FlowState::OtpRequested { .. } | FlowState::Verifying { .. }
        ) {
            debug!("discarding pending OTP challenge");
            self.state = FlowState::EnteringPhone;
        }
        self.resend_in_flight = false;
    }

    /// Sign out: clear the persisted session unconditionally and return to
    /// phone entry. Idempotent; a missing session is a harmless no-op.
    pub fn logout(&mut self) -> Result<()> {
        let cleared = self.store.clear();
        self.state = FlowState::EnteringPhone;
        self.resend_in_flight = false;
        cleared
    }
}

fn step_guard(message: &str) -> Error {
    Error::InvalidInput(InvalidInputError::Other {
        message: message.to_string(),
    })
}
