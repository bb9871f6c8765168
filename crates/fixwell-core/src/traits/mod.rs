//! Traits at the seams between the session core and its collaborators.

mod identity;
mod store;

pub use identity::{IdentityService, OtpDispatch, VerifiedIdentity};
pub use store::SessionStore;
