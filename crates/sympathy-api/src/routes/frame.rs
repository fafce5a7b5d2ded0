//! The frame-reading endpoint for polling clients.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tracing::instrument;

use sympathy_core::error::DramaError;
use sympathy_drama::OutcomeSet;
use sympathy_presenter::Animation;

use crate::error::ApiError;
use crate::state::AppState;

/// One command as shown to the rendering collaborator.
#[derive(Debug, Serialize)]
pub struct CommandView {
    /// Short command name.
    pub name: &'static str,
    /// The phrase alternation a player can type.
    pub pattern: &'static str,
    /// One-line description.
    pub summary: &'static str,
}

/// Response body for GET /.
#[derive(Debug, Serialize)]
pub struct FrameResponse {
    /// Story title.
    pub title: String,
    /// More frames are queued after this one.
    pub pending: bool,
    /// Client reload delay in seconds; absent when presentation is
    /// terminal until the next command.
    pub refresh: Option<u64>,
    /// Prompt text for the input form.
    pub prompt: String,
    /// The animation to display, if any frame had content.
    pub animation: Option<Animation>,
    /// Commands the player may submit; empty while frames are pending or
    /// once the story has finished.
    pub commands: Vec<CommandView>,
    /// Current derived outcomes.
    pub outcomes: OutcomeSet,
}

/// GET /
#[instrument(skip(state))]
async fn read_frame(State(state): State<AppState>) -> Result<Json<FrameResponse>, ApiError> {
    let mut store = state
        .store
        .lock()
        .map_err(|_| DramaError::Config("session store lock poisoned".to_owned()))?;
    let session = store.current_mut();

    let animation = session.next_animation(state.scenes.as_ref())?;
    let pending = session.pending();
    let refresh = if pending {
        animation.as_ref().map(Animation::refresh_delay)
    } else {
        None
    };

    let outcomes = session.drama.outcomes;
    let commands = if pending || outcomes.finish {
        Vec::new()
    } else {
        session
            .drama
            .commands()
            .map(|spec| CommandView {
                name: spec.name,
                pattern: spec.pattern,
                summary: spec.summary,
            })
            .collect()
    };

    Ok(Json(FrameResponse {
        title: session.presenter.title.clone(),
        pending,
        refresh,
        prompt: session.drama.prompt.clone(),
        animation,
        commands,
        outcomes,
    }))
}

/// Returns the frame-reading router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(read_frame))
}
