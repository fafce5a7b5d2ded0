//! Declarative cast list.
//!
//! The starting ensemble is described in YAML rather than constructed in
//! code, so the story's cast can be read (and adjusted) in one place. The
//! list for the tea story is embedded in the crate.

use serde::Deserialize;

use sympathy_core::error::DramaError;

use crate::actor::{Actor, ActorKind};
use crate::ensemble::Ensemble;
use crate::state::{Motivation, StateValue};

/// The embedded cast list for the tea story.
pub const CAST_YAML: &str = include_str!("../cast.yaml");

#[derive(Debug, Deserialize)]
struct CastFile {
    actors: Vec<CastEntry>,
}

/// One actor declaration in the cast list.
#[derive(Debug, Deserialize)]
struct CastEntry {
    names: Vec<String>,
    kind: ActorKind,
    #[serde(default)]
    states: Vec<StateValue>,
}

/// Builds an ensemble from a YAML cast list.
///
/// # Errors
///
/// Returns `DramaError::Config` if the YAML does not parse or if the cast
/// does not contain exactly one player-motivated character.
pub fn load_cast(yaml: &str) -> Result<Ensemble, DramaError> {
    let file: CastFile =
        serde_yaml::from_str(yaml).map_err(|e| DramaError::Config(format!("cast list: {e}")))?;

    let mut actors = Vec::with_capacity(file.actors.len());
    for entry in file.actors {
        let mut actor = Actor::new(entry.names, entry.kind);
        for state in entry.states {
            actor.set_state(state);
        }
        actors.push(actor);
    }

    let players = actors
        .iter()
        .filter(|a| a.motivation() == Some(Motivation::Player))
        .count();
    if players != 1 {
        return Err(DramaError::Config(format!(
            "cast list must declare exactly one player, found {players}"
        )));
    }

    Ok(Ensemble::new(actors))
}

/// Builds the ensemble for the embedded tea story cast.
///
/// # Errors
///
/// Returns `DramaError::Config` if the embedded cast list is malformed.
pub fn default_cast() -> Result<Ensemble, DramaError> {
    load_cast(CAST_YAML)
}
