//! State categories and their value sets.
//!
//! Every category is a closed enum rather than a free-form attribute, so an
//! actor can never hold a value outside its category's value set.

use serde::{Deserialize, Serialize};

/// Narrative-control state of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motivation {
    /// Autonomously active in the story.
    Acting,
    /// Controlled by the player.
    Player,
    /// Frozen for the rest of the session.
    Paused,
}

/// Kitchen spots an actor can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Drawer,
    Counter,
    Hob,
    Shelf,
    Fridge,
    Sink,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Drawer => "drawer",
            Self::Counter => "counter",
            Self::Hob => "hob",
            Self::Shelf => "shelf",
            Self::Fridge => "fridge",
            Self::Sink => "sink",
        };
        f.write_str(name)
    }
}

/// Tag identifying a state category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateCategory {
    Motivation,
    Location,
    Saturation,
}

/// A value in one of the state categories.
///
/// `Saturation` is a 0–100 scale; for tea it measures how far the brew has
/// come along, for the kettle how close the water is to boiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateValue {
    Motivation(Motivation),
    Location(Location),
    Saturation(u8),
}

impl StateValue {
    /// Returns the category this value belongs to.
    #[must_use]
    pub fn category(self) -> StateCategory {
        match self {
            Self::Motivation(_) => StateCategory::Motivation,
            Self::Location(_) => StateCategory::Location,
            Self::Saturation(_) => StateCategory::Saturation,
        }
    }
}
