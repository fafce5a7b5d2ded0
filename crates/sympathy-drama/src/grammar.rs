//! Command grammar and dispatcher.
//!
//! Each command declares its phrase alternation once; the same pattern
//! drives validation, matching, and the help listing. Overlaps between
//! patterns are rejected at registration time so that matching is always
//! deterministic.

use serde::Serialize;
use sympathy_core::error::DramaError;

/// Handlers a command can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Help,
    Quit,
    Refuse,
    Look,
    Check,
    Boil,
    Pour,
    AddMilk,
    AddSugar,
    BinTeabag,
    History,
}

/// An immutable (pattern, handler, metadata) triple.
#[derive(Debug, Clone, Serialize)]
pub struct CommandSpec {
    /// The handler this command dispatches to.
    #[serde(skip)]
    pub action: Action,
    /// Short name used in logs and views.
    pub name: &'static str,
    /// Phrase alternation, e.g. `"exit | finish | stop | quit"`.
    pub pattern: &'static str,
    /// One-line description for the help listing.
    pub summary: &'static str,
    /// Hidden commands are matchable but never listed.
    #[serde(skip)]
    pub hidden: bool,
}

impl CommandSpec {
    /// The individual phrases of the alternation, trimmed.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.pattern.split('|').map(str::trim)
    }

    fn matches(&self, text: &str) -> bool {
        self.phrases().any(|p| p.eq_ignore_ascii_case(text))
    }
}

/// A matched command ready to run: the handler plus the original text.
#[derive(Debug, Clone)]
pub struct Dispatch {
    /// The handler to run.
    pub action: Action,
    /// The player's input, trimmed.
    pub text: String,
}

/// The registered command set.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    specs: Vec<CommandSpec>,
}

impl Grammar {
    /// Creates an empty grammar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command.
    ///
    /// # Errors
    ///
    /// Returns `DramaError::PatternConflict` if any phrase of the new
    /// pattern is already claimed by a registered command.
    pub fn register(&mut self, spec: CommandSpec) -> Result<(), DramaError> {
        for existing in &self.specs {
            for phrase in spec.phrases() {
                if existing.matches(phrase) {
                    return Err(DramaError::PatternConflict {
                        phrase: phrase.to_owned(),
                        first: existing.name.to_owned(),
                        second: spec.name.to_owned(),
                    });
                }
            }
        }
        self.specs.push(spec);
        Ok(())
    }

    /// True iff some registered phrase matches `text` exactly
    /// (case-insensitive, surrounding whitespace ignored).
    #[must_use]
    pub fn validate(&self, text: &str) -> bool {
        self.matched(text).is_some()
    }

    /// The command matching `text`, if any. At most one can match because
    /// registration rejects overlapping phrases.
    #[must_use]
    pub fn matched(&self, text: &str) -> Option<&CommandSpec> {
        let text = text.trim();
        self.specs.iter().find(|s| s.matches(text))
    }

    /// Maps raw text to a dispatch, failing closed.
    ///
    /// # Errors
    ///
    /// Returns `DramaError::InvalidCommand` when no pattern matches.
    pub fn interpret(&self, text: &str) -> Result<Dispatch, DramaError> {
        let spec = self
            .matched(text)
            .ok_or_else(|| DramaError::InvalidCommand(text.to_owned()))?;
        Ok(Dispatch {
            action: spec.action,
            text: text.trim().to_owned(),
        })
    }

    /// Commands that may appear in listings.
    pub fn visible(&self) -> impl Iterator<Item = &CommandSpec> {
        self.specs.iter().filter(|s| !s.hidden)
    }

    /// The full command set of the tea story.
    ///
    /// # Errors
    ///
    /// Returns `DramaError::PatternConflict` if the built-in table is
    /// inconsistent; that is a programming error caught at startup.
    pub fn story() -> Result<Self, DramaError> {
        let mut grammar = Self::new();
        for spec in [
            CommandSpec {
                action: Action::Help,
                name: "help",
                pattern: "help | ?",
                summary: "Show what you can do.",
                hidden: false,
            },
            CommandSpec {
                action: Action::Quit,
                name: "quit",
                pattern: "exit | finish | stop | quit",
                summary: "End the story.",
                hidden: false,
            },
            CommandSpec {
                action: Action::Refuse,
                name: "refuse",
                pattern: "refuse",
                summary: "",
                hidden: true,
            },
            CommandSpec {
                action: Action::Look,
                name: "look",
                pattern: "look | look around",
                summary: "Take in the kitchen.",
                hidden: false,
            },
            CommandSpec {
                action: Action::Check,
                name: "check",
                pattern: "check | check progress",
                summary: "See how the tea is coming along.",
                hidden: false,
            },
            CommandSpec {
                action: Action::Boil,
                name: "boil",
                pattern: "boil kettle | put the kettle on",
                summary: "Get the water going.",
                hidden: false,
            },
            CommandSpec {
                action: Action::Pour,
                name: "pour",
                pattern: "make tea | pour tea",
                summary: "Pour the water over a teabag.",
                hidden: false,
            },
            CommandSpec {
                action: Action::AddMilk,
                name: "milk",
                pattern: "add milk | milk in",
                summary: "Add a splash of milk.",
                hidden: false,
            },
            CommandSpec {
                action: Action::AddSugar,
                name: "sugar",
                pattern: "add sugar | sugar in",
                summary: "Add a spoonful of sugar.",
                hidden: false,
            },
            CommandSpec {
                action: Action::BinTeabag,
                name: "bin",
                pattern: "bin the teabag | remove the teabag",
                summary: "Fish the teabag out.",
                hidden: false,
            },
            CommandSpec {
                action: Action::History,
                name: "history",
                pattern: "history",
                summary: "List what you have done so far.",
                hidden: false,
            },
        ] {
            grammar.register(spec)?;
        }
        Ok(grammar)
    }
}
