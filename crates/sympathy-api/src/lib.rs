//! Sympathy API — HTTP surface for the narrative engine.
//!
//! Two endpoints drive the whole story: `GET /` pops the next animation
//! for a polling client, and `POST /drama/cmd` submits a player command.

pub mod error;
pub mod routes;
pub mod state;
