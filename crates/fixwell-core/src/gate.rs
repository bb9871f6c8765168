//! Auth gate for protected destinations.

use tracing::warn;

use crate::session::Session;
use crate::traits::SessionStore;

/// Decides, for any protected navigation, whether a valid session exists.
///
/// The check is synchronous and local: validity is presence and shape
/// only, with no round trip to the identity service and no expiry check
/// against the login timestamp. It is re-evaluated on every navigation
/// into a protected area; nothing is cached and nothing retries.
pub struct AuthGate<S> {
    store: S,
}

impl<S: SessionStore> AuthGate<S> {
    /// Create a gate over the injected session store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// True when a well-formed session is currently stored.
    pub fn is_authorized(&self) -> bool {
        matches!(self.store.load(), Ok(Some(_)))
    }

    /// Admit a protected navigation, returning the session, or deny.
    ///
    /// Denial clears any session-adjacent persisted state left behind by a
    /// partial write before control returns to the unauthenticated entry
    /// point. The caller must produce no protected output on `None`.
    pub fn authorize(&self) -> Option<Session> {
        match self.store.load() {
            Ok(Some(session)) => Some(session),
            Ok(None) => {
                self.cleanup();
                None
            }
            Err(err) => {
                warn!(%err, "session store unreadable, denying access");
                self.cleanup();
                None
            }
        }
    }

    fn cleanup(&self) {
        if let Err(err) = self.store.clear() {
            warn!(%err, "failed to clear stale session state");
        }
    }
}
