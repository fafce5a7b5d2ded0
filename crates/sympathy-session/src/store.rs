//! The capacity-1 session store.

use crate::session::Session;

/// Holds exactly one session; replacement evicts the old one entirely.
///
/// There is no finer-grained access on purpose: the ensemble, frame queue,
/// and outcome set are read and written together as one unit per step, so
/// callers in a concurrent host must wrap the store in a mutex and treat
/// `current`/`replace` as a critical section.
#[derive(Debug)]
pub struct SessionStore {
    session: Session,
}

impl SessionStore {
    /// Creates a store holding `session`.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// The active session.
    #[must_use]
    pub fn current(&self) -> &Session {
        &self.session
    }

    /// The active session, mutably.
    pub fn current_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Replaces the active session, dropping the previous one. No partial
    /// merge, no history retained.
    pub fn replace(&mut self, session: Session) {
        self.session = session;
    }
}
