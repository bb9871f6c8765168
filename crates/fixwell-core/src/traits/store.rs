//! Session store trait.

use crate::session::Session;
use crate::Result;

/// Persistence for the session record. Pure data layer, no network calls.
///
/// The trait is synchronous: the auth gate evaluates it on every protected
/// navigation and must not suspend.
pub trait SessionStore {
    /// Persist the session atomically: either the full record is stored or
    /// none of it is.
    fn save(&self, session: &Session) -> Result<()>;

    /// Load the stored session. Returns `None` when no record exists or
    /// when the stored payload is not a well-formed session; a corrupted
    /// record means "not authenticated", never a fatal error.
    fn load(&self) -> Result<Option<Session>>;

    /// Remove the stored record. Safe to call when no record exists.
    fn clear(&self) -> Result<()>;
}
