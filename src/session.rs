use crate::constraints::{ConstraintError, ConstraintSet};
use crate::matcher::find_candidates;
use crate::{debug_log, info_log};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Pin (or free) a single slot
    SetSlot(usize, Option<char>),
    /// Pin all five slots from a pattern such as `_RA_E`
    SetPattern(String),
    /// New content of the "position unknown" field
    SetPresent(String),
    /// New content of the "not in word" field
    SetExcluded(String),
    Clear,
    Exit,
}

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Candidates(Vec<String>),
    /// Nothing entered yet, so there is nothing to search for
    NoInput,
    Cleared,
    Invalid(ConstraintError),
    Exit,
}

/// Frontend seam shared by the line-based and terminal interfaces.
pub trait AssistantInterface {
    fn display_welcome(&mut self, word_count: usize);
    /// `None` means the input was unusable and the loop should ask again.
    fn read_action(&mut self, constraints: &ConstraintSet) -> Option<UserAction>;
    fn display_constraints(&mut self, constraints: &ConstraintSet);
    fn display_candidates(&mut self, candidates: &[String]);
    fn display_no_input(&mut self);
    fn display_error(&mut self, message: &str);
    fn display_cleared(&mut self);
    fn display_exit_message(&mut self);
}

/// Constraint state plus the word list it is matched against.
pub struct Session<'a> {
    wordbank: &'a [String],
    constraints: ConstraintSet,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(wordbank: &'a [String]) -> Self {
        Self {
            wordbank,
            constraints: ConstraintSet::new(),
        }
    }

    #[must_use]
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Apply one edit and recompute the candidates from scratch.
    pub fn apply(&mut self, action: UserAction) -> Outcome {
        let edit = match action {
            UserAction::Exit => return Outcome::Exit,
            UserAction::Clear => {
                self.constraints.clear();
                return Outcome::Cleared;
            }
            UserAction::SetSlot(index, letter) => self.constraints.set_known(index, letter),
            UserAction::SetPattern(pattern) => self.constraints.set_pattern(&pattern),
            UserAction::SetPresent(text) => {
                self.constraints.set_present(&text);
                Ok(())
            }
            UserAction::SetExcluded(text) => {
                self.constraints.set_excluded(&text);
                Ok(())
            }
        };
        if let Err(e) = edit {
            return Outcome::Invalid(e);
        }
        self.recompute()
    }

    fn recompute(&self) -> Outcome {
        if self.constraints.is_empty() {
            return Outcome::NoInput;
        }
        match find_candidates(&self.constraints, self.wordbank) {
            Ok(candidates) => Outcome::Candidates(candidates),
            Err(e) => Outcome::Invalid(e),
        }
    }
}

pub fn assistant_loop<I: AssistantInterface>(wordbank: &[String], interface: &mut I) {
    let mut session = Session::new(wordbank);
    interface.display_welcome(wordbank.len());

    loop {
        let Some(action) = interface.read_action(session.constraints()) else {
            continue;
        };
        debug_log!("assistant_loop() - action: {:?}", action);

        match session.apply(action) {
            Outcome::Exit => {
                interface.display_exit_message();
                break;
            }
            Outcome::Cleared => interface.display_cleared(),
            Outcome::NoInput => {
                interface.display_constraints(session.constraints());
                interface.display_no_input();
            }
            Outcome::Invalid(e) => {
                info_log!("assistant_loop() - rejected: {}", e);
                interface.display_constraints(session.constraints());
                interface.display_error(&e.to_string());
            }
            Outcome::Candidates(candidates) => {
                info_log!(
                    "assistant_loop() - {} candidates for {}",
                    candidates.len(),
                    session.constraints().pattern()
                );
                interface.display_constraints(session.constraints());
                interface.display_candidates(&candidates);
            }
        }
    }
}
