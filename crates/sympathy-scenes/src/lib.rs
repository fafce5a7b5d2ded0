//! Sympathy Scenes — the scene-script collaborator.
//!
//! Scene scripts are Markdown files; loading one yields an ordered list of
//! text segments (one per paragraph or heading), each segment being the
//! lines of one presentation frame. Loading the same folder twice yields
//! the same segments, which the session layer relies on when it rebuilds.

pub mod source;

pub use source::{EmbeddedScenes, Folder, SceneSource};
