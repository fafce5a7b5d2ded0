//! Shared test doubles for the Sympathy narrative engine.

mod clock;
mod scenes;

pub use clock::FixedClock;
pub use scenes::{FailingScenes, ScriptedScenes};
