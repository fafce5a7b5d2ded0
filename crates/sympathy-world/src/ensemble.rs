//! The ensemble: every actor in the current session.

use uuid::Uuid;

use crate::actor::{Actor, ActorKind};
use crate::state::{Location, Motivation, StateValue};

/// The complete set of actors in the session.
///
/// Containment is resolved here: an actor's `contents` holds IDs, and the
/// ensemble turns those back into actors. Content actors are ordinary
/// members of the ensemble, not owned by their container.
#[derive(Debug, Clone, Default)]
pub struct Ensemble {
    actors: Vec<Actor>,
}

impl Ensemble {
    /// Creates an ensemble from a cast of actors.
    #[must_use]
    pub fn new(actors: Vec<Actor>) -> Self {
        Self { actors }
    }

    /// Iterates over all actors.
    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    /// Returns the actor with the given ID.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    /// Returns the actor with the given ID, mutably.
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    /// All actors answering to `name`.
    pub fn lookup<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Actor> {
        self.actors.iter().filter(move |a| a.answers_to(name))
    }

    /// The first actor answering to `name`, mutably.
    pub fn find_named_mut(&mut self, name: &str) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.answers_to(name))
    }

    /// All characters in the ensemble.
    pub fn characters(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(|a| a.kind == ActorKind::Character)
    }

    /// All vessels currently at `location`.
    pub fn vessels_at(&self, location: Location) -> impl Iterator<Item = &Actor> {
        self.actors
            .iter()
            .filter(move |a| a.kind == ActorKind::Vessel && a.location() == Some(location))
    }

    /// Resolves a vessel's content IDs into actors.
    #[must_use]
    pub fn contents_of(&self, vessel: &Actor) -> Vec<&Actor> {
        vessel
            .contents()
            .iter()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    /// Freezes characters to `Paused`.
    ///
    /// With `include_player` false the player character keeps acting, which
    /// is what `help` and a refusal do; `quit` passes true and ends the
    /// story for everyone.
    pub fn pause_characters(&mut self, include_player: bool) {
        for actor in &mut self.actors {
            if actor.kind != ActorKind::Character {
                continue;
            }
            if include_player || actor.motivation() != Some(Motivation::Player) {
                actor.set_state(StateValue::Motivation(Motivation::Paused));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateCategory;

    fn cast() -> Ensemble {
        let mut sophie = Actor::new(vec!["Sophie".to_owned()], ActorKind::Character);
        sophie.set_state(StateValue::Motivation(Motivation::Acting));
        let mut louise = Actor::new(vec!["Louise".to_owned()], ActorKind::Character);
        louise.set_state(StateValue::Motivation(Motivation::Player));
        let mut mug = Actor::new(vec!["mug".to_owned(), "cup".to_owned()], ActorKind::Vessel);
        mug.set_state(StateValue::Location(Location::Counter));
        let tea = Actor::new(vec!["tea".to_owned(), "teabag".to_owned()], ActorKind::Ingredient);
        Ensemble::new(vec![sophie, louise, mug, tea])
    }

    #[test]
    fn test_lookup_matches_any_name() {
        let ensemble = cast();
        assert_eq!(ensemble.lookup("cup").count(), 1);
        assert_eq!(ensemble.lookup("teabag").count(), 1);
        assert_eq!(ensemble.lookup("saucer").count(), 0);
    }

    #[test]
    fn test_contents_resolution() {
        // Arrange
        let mut ensemble = cast();
        let tea_id = ensemble.lookup("tea").next().unwrap().id;
        let mug = ensemble.find_named_mut("mug").unwrap();
        mug.insert_content(tea_id);
        let mug_id = mug.id;

        // Act
        let mug = ensemble.get(mug_id).unwrap();
        let contents = ensemble.contents_of(mug);

        // Assert
        assert_eq!(contents.len(), 1);
        assert!(contents[0].answers_to("teabag"));
    }

    #[test]
    fn test_pause_characters_spares_player_when_asked() {
        // Arrange
        let mut ensemble = cast();

        // Act
        ensemble.pause_characters(false);

        // Assert
        let sophie = ensemble.lookup("Sophie").next().unwrap();
        let louise = ensemble.lookup("Louise").next().unwrap();
        assert_eq!(sophie.motivation(), Some(Motivation::Paused));
        assert_eq!(louise.motivation(), Some(Motivation::Player));
    }

    #[test]
    fn test_pause_characters_includes_player_for_quit() {
        // Arrange
        let mut ensemble = cast();

        // Act
        ensemble.pause_characters(true);

        // Assert
        assert!(
            ensemble
                .characters()
                .all(|c| c.motivation() == Some(Motivation::Paused))
        );
    }

    #[test]
    fn test_vessels_at_filters_kind_and_location() {
        let ensemble = cast();
        assert_eq!(ensemble.vessels_at(Location::Counter).count(), 1);
        assert_eq!(ensemble.vessels_at(Location::Sink).count(), 0);
        // Ingredients never count as vessels.
        assert!(
            ensemble
                .vessels_at(Location::Counter)
                .all(|v| v.get_state(StateCategory::Motivation).is_none())
        );
    }
}
