//! fixwell-core - Session core for the fixwell admin console.
//!
//! Types, traits, the login flow state machine, and the auth gate. No
//! network or filesystem code lives here; those collaborators are injected
//! through the [`traits`] seams.

pub mod error;
pub mod flow;
pub mod gate;
pub mod session;
pub mod traits;
pub mod types;

pub use error::Error;
pub use flow::{FlowState, OtpChallenge, SessionFlow};
pub use gate::AuthGate;
pub use session::Session;
pub use traits::{IdentityService, OtpDispatch, SessionStore, VerifiedIdentity};
pub use types::{MobileNumber, OtpCode, ServiceUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
