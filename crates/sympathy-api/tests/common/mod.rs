//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use sympathy_api::routes;
use sympathy_api::state::AppState;
use sympathy_scenes::EmbeddedScenes;
use sympathy_session::{Session, SessionStore};
use sympathy_test_support::FixedClock;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> FixedClock {
    FixedClock(chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 8, 2, 7, 30, 0).unwrap())
}

/// Build the full app router over the embedded scene scripts and a
/// deterministic clock. Uses the same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    let scenes = Arc::new(EmbeddedScenes);
    let session = Session::new(&fixed_clock(), scenes.as_ref()).unwrap();
    let app_state = AppState::new(SessionStore::new(session), scenes);

    Router::new()
        .merge(routes::frame::router())
        .merge(routes::command::router())
        .merge(routes::health::router())
        .with_state(app_state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Poll `GET /` until no frames are pending, returning the terminal
/// response. Panics if the queue never settles.
pub async fn drain_frames(app: &Router) -> serde_json::Value {
    for _ in 0..32 {
        let (status, json) = get_json(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        if json["pending"] == false {
            return json;
        }
    }
    panic!("frame queue never drained");
}
