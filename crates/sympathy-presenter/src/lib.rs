//! Sympathy Presenter — frame scheduling.
//!
//! A burst of narrative text becomes an ordered queue of frames; the client
//! polls one frame at a time and is told when to come back. Exhaustion of
//! the queue is an expected condition the session layer reacts to, not an
//! error.

pub mod frame;

pub use frame::{Animation, Frame, MIN_REFRESH_SECONDS, Popped, Presenter};
