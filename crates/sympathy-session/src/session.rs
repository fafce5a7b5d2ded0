//! A narrative session: drama plus frame queue.

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use sympathy_core::clock::Clock;
use sympathy_core::error::DramaError;
use sympathy_drama::{Drama, OutcomeSet};
use sympathy_presenter::{Animation, Popped, Presenter};
use sympathy_scenes::{Folder, SceneSource};
use sympathy_world::cast::default_cast;

/// Title carried through to the renderer.
pub const TITLE: &str = "Tea and Sympathy";

/// The scene script matching the current outcomes.
///
/// Precedence runs from story-over down to the opening scene: finish,
/// paused, served, brewed, early.
#[must_use]
pub fn scene_for(outcomes: &OutcomeSet) -> &'static str {
    if outcomes.finish {
        "quit.md"
    } else if outcomes.paused {
        "pause.md"
    } else if outcomes.served {
        "made.md"
    } else if outcomes.brewed {
        "kettle.md"
    } else {
        "early.md"
    }
}

/// One running story: ensemble, outcomes, input buffer, and frames.
#[derive(Debug)]
pub struct Session {
    /// Session identity.
    pub id: Uuid,
    /// When the session was built.
    pub started_at: DateTime<Utc>,
    /// The narrative state machine.
    pub drama: Drama,
    /// The frame scheduler.
    pub presenter: Presenter,
}

impl Session {
    /// Builds a fresh session from the cast list and the opening scene.
    ///
    /// # Errors
    ///
    /// Returns `DramaError::Config` if the cast list is malformed and
    /// `DramaError::SceneLoad` if the scene source fails.
    pub fn new(clock: &dyn Clock, scenes: &dyn SceneSource) -> Result<Self, DramaError> {
        let drama = Drama::new(default_cast()?)?;
        let segments = scenes.load(&Folder::single(scene_for(&drama.outcomes)))?;
        let session = Self {
            id: Uuid::new_v4(),
            started_at: clock.now(),
            drama,
            presenter: Presenter::build(TITLE, segments),
        };
        debug!(session_id = %session.id, "session built");
        Ok(session)
    }

    /// Replaces the frame queue with one frame per line of a command's
    /// output.
    pub fn represent(&mut self, lines: Vec<String>) {
        let segments = lines.into_iter().map(|line| vec![line]).collect();
        self.presenter = Presenter::build(TITLE, segments);
    }

    /// Rebuilds the frame queue from the scene matching current outcomes,
    /// clearing the input buffer first.
    ///
    /// # Errors
    ///
    /// Returns `DramaError::SceneLoad` if the scene source fails.
    pub fn rebuild_frames(&mut self, scenes: &dyn SceneSource) -> Result<(), DramaError> {
        self.drama.input_text.clear();
        let scene = scene_for(&self.drama.outcomes);
        let segments = scenes.load(&Folder::single(scene))?;
        self.presenter = Presenter::build(TITLE, segments);
        debug!(scene, frames = self.presenter.len(), "frame queue rebuilt");
        Ok(())
    }

    /// Pops frames until one animates; on exhaustion, rebuilds the queue
    /// exactly once and tries again.
    ///
    /// Returns `None` only if the rebuilt queue also has nothing to show.
    ///
    /// # Errors
    ///
    /// Returns `DramaError::SceneLoad` if the rebuild's scene load fails.
    pub fn next_animation(
        &mut self,
        scenes: &dyn SceneSource,
    ) -> Result<Option<Animation>, DramaError> {
        if let Some(animation) = Self::drain(&mut self.presenter) {
            return Ok(Some(animation));
        }
        self.rebuild_frames(scenes)?;
        Ok(Self::drain(&mut self.presenter))
    }

    /// True if frames remain after the current one.
    #[must_use]
    pub fn pending(&self) -> bool {
        self.presenter.pending()
    }

    fn drain(presenter: &mut Presenter) -> Option<Animation> {
        loop {
            match presenter.pop() {
                Popped::Frame(frame) => {
                    if let Some(animation) = presenter.animate(frame) {
                        return Some(animation);
                    }
                    // Blank control frame; keep going.
                }
                Popped::Exhausted => return None,
            }
        }
    }
}
