//! Scene folders and the scene source port.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use sympathy_core::error::DramaError;

/// Describes an ordered collection of scene scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    /// Human-readable description of the collection.
    pub description: String,
    /// Script paths in playback order.
    pub paths: Vec<String>,
}

impl Folder {
    /// The five scene scripts of the tea story.
    #[must_use]
    pub fn tea_story() -> Self {
        Self {
            description: "Tea and Sympathy".to_owned(),
            paths: vec![
                "early.md".to_owned(),
                "kettle.md".to_owned(),
                "made.md".to_owned(),
                "pause.md".to_owned(),
                "quit.md".to_owned(),
            ],
        }
    }

    /// A folder holding one script.
    #[must_use]
    pub fn single(path: &str) -> Self {
        Self {
            description: "Tea and Sympathy".to_owned(),
            paths: vec![path.to_owned()],
        }
    }
}

/// Port to whatever holds the scene scripts.
///
/// Loading is synchronous and cheap; repeated loads of the same folder must
/// yield identical segments.
pub trait SceneSource: Send + Sync {
    /// Loads every script in the folder, in order, as groups of lines.
    ///
    /// # Errors
    ///
    /// Returns `DramaError::SceneLoad` if a path is unknown.
    fn load(&self, folder: &Folder) -> Result<Vec<Vec<String>>, DramaError>;
}

/// Scene scripts compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedScenes;

impl EmbeddedScenes {
    fn script(path: &str) -> Option<&'static str> {
        match path {
            "early.md" => Some(include_str!("../scenes/early.md")),
            "kettle.md" => Some(include_str!("../scenes/kettle.md")),
            "made.md" => Some(include_str!("../scenes/made.md")),
            "pause.md" => Some(include_str!("../scenes/pause.md")),
            "quit.md" => Some(include_str!("../scenes/quit.md")),
            _ => None,
        }
    }
}

impl SceneSource for EmbeddedScenes {
    fn load(&self, folder: &Folder) -> Result<Vec<Vec<String>>, DramaError> {
        let mut segments = Vec::new();
        for path in &folder.paths {
            let markdown = Self::script(path)
                .ok_or_else(|| DramaError::SceneLoad(format!("unknown scene script {path:?}")))?;
            segments.extend(parse_segments(markdown));
        }
        Ok(segments)
    }
}

/// Splits a Markdown script into segments: one per heading or paragraph,
/// with soft breaks preserved as separate lines.
fn parse_segments(markdown: &str) -> Vec<Vec<String>> {
    let mut segments = Vec::new();
    let mut current: Option<Vec<String>> = None;
    let mut line = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Paragraph | Tag::Heading { .. }) => {
                current = Some(Vec::new());
                line.clear();
            }
            Event::Text(text) | Event::Code(text) => {
                line.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(segment) = current.as_mut() {
                    segment.push(std::mem::take(&mut line));
                }
            }
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_)) => {
                if let Some(mut segment) = current.take() {
                    if !line.is_empty() {
                        segment.push(std::mem::take(&mut line));
                    }
                    segments.push(segment);
                }
            }
            _ => {}
        }
    }
    segments
}
