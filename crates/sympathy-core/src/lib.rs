//! Sympathy Core — shared abstractions.
//!
//! This crate defines the error taxonomy and the clock trait that every
//! other crate in the engine depends on. It contains no story logic.

pub mod clock;
pub mod error;
