//! Sympathy Drama — the narrative core.
//!
//! Three pieces live here: the command grammar that turns free text into a
//! dispatch, the state machine that runs a handler against the ensemble and
//! applies the refusal-substitution rule, and the outcome engine that
//! derives the story's progress flags from world state after every step.

pub mod grammar;
pub mod machine;
pub mod outcomes;

pub use grammar::{Action, CommandSpec, Dispatch, Grammar};
pub use machine::{Drama, REFUSAL, is_refusal};
pub use outcomes::OutcomeSet;
