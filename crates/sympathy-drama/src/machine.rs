//! The narrative state machine.
//!
//! A step runs one handler against the ensemble and collects its narrative
//! lines. Any step whose lines carry the refusal sentinel is discarded and
//! replaced wholesale by the `refuse` handler, whatever handler produced
//! it; that models an illegal-in-context move being redirected to a canned
//! rejection. Outcomes are recomputed unconditionally afterwards.

use tracing::debug;

use sympathy_core::error::DramaError;
use sympathy_world::{Ensemble, Location, StateValue};

use crate::grammar::{Action, CommandSpec, Dispatch, Grammar};
use crate::outcomes::OutcomeSet;

/// The sentinel line a handler emits to signal an illegal-in-context move.
///
/// Detecting refusals by scanning narrative text is inherited source
/// behavior; it is kept behind [`is_refusal`] so the substitution policy
/// stays auditable in one place.
pub const REFUSAL: &str = "That's not an option right now.";

/// Prompt shown after a refusal.
const STUCK_PROMPT: &str = "If you're stuck, try 'help' or 'history'.";

/// Default input prompt.
const DEFAULT_PROMPT: &str = "?";

/// True if any produced line carries the refusal sentinel.
#[must_use]
pub fn is_refusal(lines: &[String]) -> bool {
    lines.iter().any(|line| line.contains(REFUSAL))
}

/// The narrative state machine: grammar, ensemble, and derived outcomes.
#[derive(Debug, Clone)]
pub struct Drama {
    grammar: Grammar,
    /// The cast being acted upon.
    pub ensemble: Ensemble,
    /// Derived progress flags, recomputed after every step.
    pub outcomes: OutcomeSet,
    /// The most recent player input.
    pub input_text: String,
    /// Accepted inputs, oldest first.
    pub history: Vec<String>,
    /// Prompt text for the next input.
    pub prompt: String,
}

impl Drama {
    /// Creates a drama over `ensemble` with the story's command set.
    ///
    /// # Errors
    ///
    /// Returns `DramaError::PatternConflict` if the built-in command table
    /// is inconsistent.
    pub fn new(ensemble: Ensemble) -> Result<Self, DramaError> {
        Ok(Self {
            grammar: Grammar::story()?,
            ensemble,
            outcomes: OutcomeSet::default(),
            input_text: String::new(),
            history: Vec::new(),
            prompt: DEFAULT_PROMPT.to_owned(),
        })
    }

    /// True iff `text` matches a registered command.
    #[must_use]
    pub fn validate(&self, text: &str) -> bool {
        self.grammar.validate(text)
    }

    /// Maps raw text to a dispatch.
    ///
    /// # Errors
    ///
    /// Returns `DramaError::InvalidCommand` when nothing matches; the
    /// caller must reject the request without touching any state.
    pub fn interpret(&self, text: &str) -> Result<Dispatch, DramaError> {
        self.grammar.interpret(text)
    }

    /// Commands fit for a listing.
    pub fn commands(&self) -> impl Iterator<Item = &CommandSpec> {
        self.grammar.visible()
    }

    /// Runs one step: handler, refusal substitution, outcome recomputation.
    ///
    /// Returns the narrative lines the step produced.
    pub fn step(&mut self, dispatch: &Dispatch) -> Vec<String> {
        self.input_text = dispatch.text.clone();
        self.history.push(dispatch.text.clone());

        let mut lines = self.run(dispatch.action, &dispatch.text);
        if dispatch.action != Action::Refuse && is_refusal(&lines) {
            debug!(text = %dispatch.text, "step refused, substituting");
            lines = self.run(Action::Refuse, &dispatch.text);
        }

        self.outcomes = self.outcomes.recompute(&self.ensemble);
        debug!(?dispatch.action, produced = lines.len(), "step complete");
        lines
    }

    fn run(&mut self, action: Action, text: &str) -> Vec<String> {
        match action {
            Action::Help => self.do_help(),
            Action::Quit => self.do_quit(),
            Action::Refuse => self.do_refuse(text),
            Action::Look => self.do_look(),
            Action::Check => self.do_check(),
            Action::Boil => self.do_boil(),
            Action::Pour => self.do_pour(),
            Action::AddMilk => self.do_add_ingredient("milk", "A splash of milk goes in."),
            Action::AddSugar => {
                self.do_add_ingredient("sugar", "One spoonful of sugar, well stirred.")
            }
            Action::BinTeabag => self.do_bin_teabag(),
            Action::History => self.do_history(),
        }
    }

    fn do_help(&mut self) -> Vec<String> {
        self.ensemble.pause_characters(false);

        let mut lines = vec![
            "**Help**".to_owned(),
            "You are woken early one Sunday morning.".to_owned(),
            "Your flatmate is up and anxious.".to_owned(),
            "Maybe you could make her a cup of tea.".to_owned(),
        ];
        lines.extend(
            self.grammar
                .visible()
                .map(|spec| format!("*{}* — {}", spec.pattern, spec.summary)),
        );
        lines.push("Start with *look around*.".to_owned());
        lines.push("The character dialogue may give you some hints.".to_owned());
        lines.push("To see how things are coming along, use the *check* command.".to_owned());
        lines
    }

    fn do_quit(&mut self) -> Vec<String> {
        self.ensemble.pause_characters(true);
        vec![String::new()]
    }

    fn do_refuse(&mut self, text: &str) -> Vec<String> {
        self.prompt = STUCK_PROMPT.to_owned();
        self.ensemble.pause_characters(false);
        vec![text.to_owned(), REFUSAL.to_owned()]
    }

    fn do_look(&mut self) -> Vec<String> {
        let mut lines = vec!["The kitchen is small and quiet.".to_owned()];
        for actor in self.ensemble.iter() {
            let Some(location) = actor.location() else {
                continue;
            };
            let Some(name) = actor.names.first() else {
                continue;
            };
            lines.push(format!("There is a {name} by the {location}."));
        }
        for character in self.ensemble.characters() {
            if let Some(name) = character.names.first() {
                lines.push(format!("{name} is here."));
            }
        }
        lines
    }

    fn do_check(&mut self) -> Vec<String> {
        let o = self.outcomes;
        let mut lines = vec!["**Progress**".to_owned()];
        lines.push(
            if o.brewed {
                "The tea has brewed."
            } else {
                "No tea has been made yet."
            }
            .to_owned(),
        );
        if o.untidy {
            lines.push("There's a teabag sitting in the mug.".to_owned());
        }
        if o.stingy {
            lines.push("No milk in it so far.".to_owned());
        }
        if o.sugary {
            lines.push("It has sugar in.".to_owned());
        }
        if o.served {
            lines.push("The tea is ready to hand over.".to_owned());
        }
        lines
    }

    fn do_boil(&mut self) -> Vec<String> {
        let Some(kettle) = self.ensemble.find_named_mut("kettle") else {
            return vec![REFUSAL.to_owned()];
        };
        if kettle.saturation() == Some(100) {
            // Already boiled; boiling twice is not a move.
            return vec![REFUSAL.to_owned()];
        }
        kettle.set_state(StateValue::Saturation(100));
        kettle.set_state(StateValue::Location(Location::Hob));
        vec![
            "You fill the kettle and set it on the hob.".to_owned(),
            "Before long it rumbles up to the boil.".to_owned(),
        ]
    }

    fn do_pour(&mut self) -> Vec<String> {
        let boiled = self
            .ensemble
            .lookup("kettle")
            .any(|k| k.saturation() == Some(100));
        if !boiled {
            return vec![REFUSAL.to_owned()];
        }
        let Some(tea_id) = self.ensemble.lookup("tea").next().map(|a| a.id) else {
            return vec![REFUSAL.to_owned()];
        };
        let Some(mug_id) = self
            .ensemble
            .vessels_at(Location::Counter)
            .next()
            .map(|a| a.id)
        else {
            return vec![REFUSAL.to_owned()];
        };
        if self
            .ensemble
            .get(mug_id)
            .is_some_and(|mug| mug.contents().contains(&tea_id))
        {
            return vec![REFUSAL.to_owned()];
        }

        if let Some(tea) = self.ensemble.get_mut(tea_id) {
            tea.set_state(StateValue::Saturation(100));
            tea.set_state(StateValue::Location(Location::Counter));
        }
        if let Some(mug) = self.ensemble.get_mut(mug_id) {
            mug.insert_content(tea_id);
        }
        vec![
            "You drop a teabag in the mug and pour on the boiling water.".to_owned(),
            "The brew turns a deep builder's brown.".to_owned(),
        ]
    }

    fn do_add_ingredient(&mut self, name: &str, line: &str) -> Vec<String> {
        let Some(ingredient_id) = self.ensemble.lookup(name).next().map(|a| a.id) else {
            return vec![REFUSAL.to_owned()];
        };
        let Some(mug_id) = self
            .ensemble
            .vessels_at(Location::Counter)
            .next()
            .map(|a| a.id)
        else {
            return vec![REFUSAL.to_owned()];
        };
        if self
            .ensemble
            .get(mug_id)
            .is_some_and(|mug| mug.contents().contains(&ingredient_id))
        {
            return vec![REFUSAL.to_owned()];
        }

        if let Some(ingredient) = self.ensemble.get_mut(ingredient_id) {
            ingredient.set_state(StateValue::Location(Location::Counter));
        }
        if let Some(mug) = self.ensemble.get_mut(mug_id) {
            mug.insert_content(ingredient_id);
        }
        vec![line.to_owned()]
    }

    fn do_bin_teabag(&mut self) -> Vec<String> {
        let Some(tea_id) = self.ensemble.lookup("tea").next().map(|a| a.id) else {
            return vec![REFUSAL.to_owned()];
        };
        let Some(mug_id) = self
            .ensemble
            .vessels_at(Location::Counter)
            .find(|mug| mug.contents().contains(&tea_id))
            .map(|a| a.id)
        else {
            return vec![REFUSAL.to_owned()];
        };

        if let Some(mug) = self.ensemble.get_mut(mug_id) {
            mug.remove_content(tea_id);
        }
        if let Some(tea) = self.ensemble.get_mut(tea_id) {
            tea.set_state(StateValue::Location(Location::Sink));
        }
        vec!["You fish out the teabag and drop it in the sink.".to_owned()]
    }

    fn do_history(&mut self) -> Vec<String> {
        // The current input is already recorded; report what came before.
        let prior = &self.history[..self.history.len().saturating_sub(1)];
        if prior.is_empty() {
            return vec!["Nothing submitted yet.".to_owned()];
        }
        let mut lines = vec!["**History**".to_owned()];
        lines.extend(prior.iter().cloned());
        lines
    }
}
