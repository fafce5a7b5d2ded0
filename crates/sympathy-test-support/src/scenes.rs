//! Canned scene sources.

use sympathy_core::error::DramaError;
use sympathy_scenes::{Folder, SceneSource};

/// A scene source that returns the same segments for every folder.
#[derive(Debug, Clone)]
pub struct ScriptedScenes {
    segments: Vec<Vec<String>>,
}

impl ScriptedScenes {
    /// Creates a source that always yields `segments`.
    #[must_use]
    pub fn new(segments: Vec<Vec<String>>) -> Self {
        Self { segments }
    }

    /// A source with a single one-line segment.
    #[must_use]
    pub fn one_liner(line: &str) -> Self {
        Self::new(vec![vec![line.to_owned()]])
    }
}

impl SceneSource for ScriptedScenes {
    fn load(&self, _folder: &Folder) -> Result<Vec<Vec<String>>, DramaError> {
        Ok(self.segments.clone())
    }
}

/// A scene source that always fails.
#[derive(Debug, Clone, Copy)]
pub struct FailingScenes;

impl SceneSource for FailingScenes {
    fn load(&self, folder: &Folder) -> Result<Vec<Vec<String>>, DramaError> {
        Err(DramaError::SceneLoad(format!(
            "scripted failure loading {:?}",
            folder.paths
        )))
    }
}
