//! The command submission endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use sympathy_core::error::DramaError;
use sympathy_drama::OutcomeSet;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /drama/cmd.
#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    /// Raw player input.
    pub cmd: String,
}

/// Response body returned after a command runs.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    /// The command matched and ran exactly once.
    pub accepted: bool,
    /// Outcomes after the step.
    pub outcomes: OutcomeSet,
}

/// POST /drama/cmd
///
/// Validation fails closed: input matching no registered pattern is
/// rejected with 401 and mutates nothing.
#[instrument(skip(state, request))]
async fn submit_command(
    State(state): State<AppState>,
    Json(request): Json<CommandRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let mut store = state
        .store
        .lock()
        .map_err(|_| DramaError::Config("session store lock poisoned".to_owned()))?;
    let session = store.current_mut();

    let dispatch = session.drama.interpret(&request.cmd)?;
    info!(cmd = %dispatch.text, "running command");

    let lines = session.drama.step(&dispatch);
    session.represent(lines);

    Ok(Json(CommandResponse {
        accepted: true,
        outcomes: session.drama.outcomes,
    }))
}

/// Returns the command router.
pub fn router() -> Router<AppState> {
    Router::new().route("/drama/cmd", post(submit_command))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use sympathy_session::{Session, SessionStore};
    use sympathy_test_support::{FixedClock, ScriptedScenes};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 8, 2, 7, 30, 0).unwrap());
        let scenes = ScriptedScenes::one_liner("opening");
        let session = Session::new(&clock, &scenes).unwrap();
        AppState::new(SessionStore::new(session), Arc::new(scenes))
    }

    async fn post_cmd(state: AppState, cmd: &str) -> (StatusCode, Value) {
        let app = router().with_state(state);
        let body = serde_json::json!({ "cmd": cmd });
        let request = Request::builder()
            .method("POST")
            .uri("/drama/cmd")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[tokio::test]
    async fn test_valid_command_returns_outcomes() {
        // Act
        let (status, json) = post_cmd(test_state(), "help").await;

        // Assert — help pauses the non-player character.
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["accepted"], true);
        assert_eq!(json["outcomes"]["paused"], true);
        assert_eq!(json["outcomes"]["finish"], false);
    }

    #[tokio::test]
    async fn test_quit_finishes_the_story() {
        // Act
        let (status, json) = post_cmd(test_state(), "quit").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["outcomes"]["finish"], true);
        assert_eq!(json["outcomes"]["paused"], false);
    }

    #[tokio::test]
    async fn test_invalid_command_returns_401() {
        // Act
        let (status, json) = post_cmd(test_state(), "make me a sandwich").await;

        // Assert
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "invalid_command");
    }

    #[tokio::test]
    async fn test_invalid_command_mutates_nothing() {
        // Arrange
        let state = test_state();

        // Act
        let _ = post_cmd(state.clone(), "gibberish").await;

        // Assert — ensemble, outcomes, and frame queue are untouched.
        let store = state.store.lock().unwrap();
        let session = store.current();
        assert_eq!(session.drama.outcomes, OutcomeSet::default());
        assert!(session.drama.history.is_empty());
        assert_eq!(session.presenter.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_body_returns_422() {
        // Arrange
        let app = router().with_state(test_state());
        let request = Request::builder()
            .method("POST")
            .uri("/drama/cmd")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert — Axum returns 422 for deserialization failures.
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
