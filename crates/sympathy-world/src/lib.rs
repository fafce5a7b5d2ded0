//! Sympathy World — the simulated cast.
//!
//! Actors carry typed state (one value per state category) and may hold
//! other actors as contents. The ensemble is the complete set of actors in
//! the current session; it is built from a declarative cast list and only
//! ever mutated by drama handlers.

pub mod actor;
pub mod cast;
pub mod ensemble;
pub mod state;

pub use actor::{Actor, ActorKind};
pub use ensemble::Ensemble;
pub use state::{Location, Motivation, StateCategory, StateValue};
