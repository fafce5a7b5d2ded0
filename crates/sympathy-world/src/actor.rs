//! Actors: characters and objects with typed state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::{Location, Motivation, StateCategory, StateValue};

/// What sort of thing an actor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    /// A person in the story.
    Character,
    /// Something that can hold other actors (a mug).
    Vessel,
    /// A fixture that does work (a kettle).
    Appliance,
    /// Something that goes into a vessel (tea, milk, sugar).
    Ingredient,
}

/// A simulated entity: identity, typed state, and contents.
///
/// Actors are created at session start from the cast list and live for the
/// whole session; a rebuild replaces the entire ensemble rather than
/// destroying individual actors.
#[derive(Debug, Clone)]
pub struct Actor {
    /// Stable identity within the session.
    pub id: Uuid,
    /// Names the actor answers to.
    pub names: Vec<String>,
    /// What sort of thing this is.
    pub kind: ActorKind,
    states: HashMap<StateCategory, StateValue>,
    contents: Vec<Uuid>,
}

impl Actor {
    /// Creates an actor with no state set.
    #[must_use]
    pub fn new(names: Vec<String>, kind: ActorKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            names,
            kind,
            states: HashMap::new(),
            contents: Vec::new(),
        }
    }

    /// True if `name` is one of this actor's names (case-insensitive).
    #[must_use]
    pub fn answers_to(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Returns the current value in `category`, if any is set.
    #[must_use]
    pub fn get_state(&self, category: StateCategory) -> Option<StateValue> {
        self.states.get(&category).copied()
    }

    /// Sets `value` in its own category, replacing any previous value.
    ///
    /// Motivation is one-directional: once a character is `Paused` it stays
    /// paused for the rest of the session, whatever a handler asks for.
    pub fn set_state(&mut self, value: StateValue) {
        if value.category() == StateCategory::Motivation
            && self.motivation() == Some(Motivation::Paused)
        {
            return;
        }
        self.states.insert(value.category(), value);
    }

    /// Convenience accessor for the Motivation category.
    #[must_use]
    pub fn motivation(&self) -> Option<Motivation> {
        match self.get_state(StateCategory::Motivation) {
            Some(StateValue::Motivation(m)) => Some(m),
            _ => None,
        }
    }

    /// Convenience accessor for the Location category.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        match self.get_state(StateCategory::Location) {
            Some(StateValue::Location(l)) => Some(l),
            _ => None,
        }
    }

    /// Convenience accessor for the Saturation category.
    #[must_use]
    pub fn saturation(&self) -> Option<u8> {
        match self.get_state(StateCategory::Saturation) {
            Some(StateValue::Saturation(s)) => Some(s),
            _ => None,
        }
    }

    /// IDs of the actors this one holds.
    #[must_use]
    pub fn contents(&self) -> &[Uuid] {
        &self.contents
    }

    /// Adds `id` to this actor's contents. Idempotent.
    pub fn insert_content(&mut self, id: Uuid) {
        if !self.contents.contains(&id) {
            self.contents.push(id);
        }
    }

    /// Removes `id` from this actor's contents; returns whether it was held.
    pub fn remove_content(&mut self, id: Uuid) -> bool {
        let before = self.contents.len();
        self.contents.retain(|c| *c != id);
        self.contents.len() != before
    }
}
