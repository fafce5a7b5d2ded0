//! Shared application state.

use std::sync::{Arc, Mutex};

use sympathy_scenes::SceneSource;
use sympathy_session::SessionStore;

/// Application state shared across all request handlers.
///
/// The session store sits behind a mutex: a step reads and writes the
/// ensemble, frame queue, and outcomes as one unit, so every request takes
/// the lock for its whole body.
#[derive(Clone)]
pub struct AppState {
    /// The capacity-1 session store.
    pub store: Arc<Mutex<SessionStore>>,
    /// The scene-script collaborator.
    pub scenes: Arc<dyn SceneSource>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(store: SessionStore, scenes: Arc<dyn SceneSource>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            scenes,
        }
    }
}
