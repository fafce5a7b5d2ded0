//! Sympathy Session — one running story at a time.
//!
//! A session ties the drama to a presenter full of frames. The store holds
//! exactly one session; replacing it evicts the old one wholesale. When
//! the frame queue runs dry the session rebuilds it from the scene script
//! matching the current outcomes.

pub mod session;
pub mod store;

pub use session::{Session, TITLE, scene_for};
pub use store::SessionStore;
