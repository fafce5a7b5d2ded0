//! Engine error types.

use thiserror::Error;

/// Top-level error type for the narrative engine.
///
/// Only `InvalidCommand` is ever surfaced to a player; everything else is
/// either a programming invariant caught at startup or an infrastructure
/// failure handled by the server.
#[derive(Debug, Error)]
pub enum DramaError {
    /// Raw input matched no registered command pattern. The request is
    /// rejected and no state is mutated.
    #[error("no registered command matches {0:?}")]
    InvalidCommand(String),

    /// Two command patterns share a phrase. Raised at registration time so
    /// that matching stays deterministic.
    #[error("phrase {phrase:?} is claimed by both {first:?} and {second:?}")]
    PatternConflict {
        /// The phrase both commands claim.
        phrase: String,
        /// Name of the command registered first.
        first: String,
        /// Name of the command whose registration failed.
        second: String,
    },

    /// The scene-script collaborator could not produce text segments.
    #[error("scene load failed: {0}")]
    SceneLoad(String),

    /// Invalid startup configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
