//! Route modules for the Sympathy API.

pub mod command;
pub mod frame;
pub mod health;
