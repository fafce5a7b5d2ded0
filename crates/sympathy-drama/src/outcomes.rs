//! Derived narrative outcomes.
//!
//! Outcomes are never stored authoritatively; the whole set is recomputed
//! from the ensemble after every state-machine step. The one exception to
//! "from scratch" is `brewed`, which is ORed with its prior value: a brewed
//! cup stays brewed even if it is later emptied. That asymmetry is source
//! behavior and deliberately preserved.

use serde::Serialize;

use sympathy_world::{Ensemble, Location, Motivation};

/// The fixed set of narrative outcome flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeSet {
    /// Some tea has reached full saturation.
    pub brewed: bool,
    /// A teabag is still sitting in a served mug.
    pub untidy: bool,
    /// No milk has gone in.
    pub stingy: bool,
    /// Sugar has gone in.
    pub sugary: bool,
    /// Brewed, tidy, and with milk: a proper cup.
    pub served: bool,
    /// Every character is paused; the story is over.
    pub finish: bool,
    /// Someone is paused but the story is not over.
    pub paused: bool,
}

impl OutcomeSet {
    /// Recomputes the set from the ensemble.
    ///
    /// Missing structures (no mug on the counter yet, no tea) simply leave
    /// their flags at their natural defaults; nothing here can fail. With no
    /// characters in the ensemble there is nothing to scan and the previous
    /// set is returned unchanged.
    #[must_use]
    pub fn recompute(self, ensemble: &Ensemble) -> Self {
        if ensemble.characters().next().is_none() {
            return self;
        }

        let contents: Vec<_> = ensemble
            .vessels_at(Location::Counter)
            .flat_map(|mug| ensemble.contents_of(mug))
            .collect();

        let brewed = self.brewed
            || ensemble
                .lookup("tea")
                .any(|tea| tea.saturation() == Some(100));
        let untidy = contents.iter().any(|a| a.answers_to("tea"));
        let stingy = !contents.iter().any(|a| a.answers_to("milk"));
        let sugary = contents.iter().any(|a| a.answers_to("sugar"));
        let served = brewed && !untidy && !stingy;

        let finish = ensemble
            .characters()
            .all(|c| c.motivation() == Some(Motivation::Paused));
        let paused = !finish
            && ensemble
                .characters()
                .any(|c| c.motivation() == Some(Motivation::Paused));

        Self {
            brewed,
            untidy,
            stingy,
            sugary,
            served,
            finish,
            paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sympathy_world::{Actor, ActorKind, StateValue};

    fn base_cast() -> Ensemble {
        sympathy_world::cast::default_cast().unwrap()
    }

    fn put_in_mug(ensemble: &mut Ensemble, name: &str) {
        let id = ensemble.lookup(name).next().unwrap().id;
        let mug = ensemble.find_named_mut("mug").unwrap();
        mug.insert_content(id);
    }

    fn saturate_tea(ensemble: &mut Ensemble) {
        let tea = ensemble.find_named_mut("tea").unwrap();
        tea.set_state(StateValue::Saturation(100));
    }

    #[test]
    fn test_recompute_is_pure() {
        // Arrange
        let mut ensemble = base_cast();
        saturate_tea(&mut ensemble);
        put_in_mug(&mut ensemble, "sugar");

        // Act
        let once = OutcomeSet::default().recompute(&ensemble);
        let twice = OutcomeSet::default().recompute(&ensemble);

        // Assert
        assert_eq!(once, twice);
    }

    #[test]
    fn test_saturated_tea_without_milk_is_brewed_but_stingy() {
        // Arrange — scenario: tea at 100, nothing in the mug.
        let mut ensemble = base_cast();
        saturate_tea(&mut ensemble);

        // Act
        let outcomes = OutcomeSet::default().recompute(&ensemble);

        // Assert
        assert!(outcomes.brewed);
        assert!(outcomes.stingy);
        assert!(!outcomes.served);
    }

    #[test]
    fn test_milk_in_mug_and_no_loose_teabag_serves_the_tea() {
        // Arrange — tea consumed into the brew, bag removed, milk in.
        let mut ensemble = base_cast();
        saturate_tea(&mut ensemble);
        put_in_mug(&mut ensemble, "milk");

        // Act
        let outcomes = OutcomeSet::default().recompute(&ensemble);

        // Assert
        assert!(!outcomes.untidy);
        assert!(!outcomes.stingy);
        assert!(outcomes.served);
    }

    #[test]
    fn test_teabag_left_in_mug_is_untidy_and_blocks_serving() {
        // Arrange
        let mut ensemble = base_cast();
        saturate_tea(&mut ensemble);
        put_in_mug(&mut ensemble, "tea");
        put_in_mug(&mut ensemble, "milk");

        // Act
        let outcomes = OutcomeSet::default().recompute(&ensemble);

        // Assert
        assert!(outcomes.untidy);
        assert!(!outcomes.served);
    }

    #[test]
    fn test_brewed_is_a_monotonic_latch() {
        // Arrange — brew once, then take the tea back below saturation.
        let mut ensemble = base_cast();
        saturate_tea(&mut ensemble);
        let latched = OutcomeSet::default().recompute(&ensemble);
        let tea = ensemble.find_named_mut("tea").unwrap();
        tea.set_state(StateValue::Saturation(0));

        // Act
        let outcomes = latched.recompute(&ensemble);

        // Assert — the latch holds.
        assert!(outcomes.brewed);
    }

    #[test]
    fn test_finish_requires_every_character_paused() {
        // Arrange
        let mut ensemble = base_cast();
        ensemble.pause_characters(false);

        // Act
        let partial = OutcomeSet::default().recompute(&ensemble);
        ensemble.pause_characters(true);
        let full = partial.recompute(&ensemble);

        // Assert — paused and finish are mutually exclusive.
        assert!(partial.paused);
        assert!(!partial.finish);
        assert!(full.finish);
        assert!(!full.paused);
    }

    #[test]
    fn test_empty_ensemble_keeps_previous_outcomes() {
        // Arrange
        let prev = OutcomeSet {
            brewed: true,
            sugary: true,
            ..OutcomeSet::default()
        };
        let empty = Ensemble::default();

        // Act
        let outcomes = prev.recompute(&empty);

        // Assert — recomputation is a no-op, not an error.
        assert_eq!(outcomes, prev);
    }

    #[test]
    fn test_props_only_ensemble_keeps_previous_outcomes() {
        // Arrange — no characters at all, only a mug.
        let mut mug = Actor::new(vec!["mug".to_owned()], ActorKind::Vessel);
        mug.set_state(StateValue::Location(Location::Counter));
        let ensemble = Ensemble::new(vec![mug]);
        let prev = OutcomeSet::default();

        // Act
        let outcomes = prev.recompute(&ensemble);

        // Assert
        assert_eq!(outcomes, prev);
    }
}
