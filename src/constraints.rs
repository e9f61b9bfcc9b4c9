//! Constraint set entered by the user.
//!
//! Holds the three kinds of knowledge gathered during a game: letters pinned to
//! a slot, letters present somewhere in the remaining slots, and letters that
//! are not in the word at all. The editing operations keep the three groups
//! disjoint, so a frontend only has to forward raw field text.

use std::fmt;

pub const WORD_LENGTH: usize = 5;

/// Errors raised when constraints cannot be parsed or matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// A known-letter pattern was not exactly five characters long
    InvalidPattern(String),
    /// A slot index outside `0..5`
    InvalidSlot(usize),
    /// A slot given something other than a letter
    InvalidLetter(char),
    /// More present letters than there are unknown slots to hold them
    TooManyPresent { present: usize, unknown: usize },
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern(pattern) => write!(
                f,
                "Pattern '{pattern}' must be 5 characters (letters, or _ for unknown)"
            ),
            Self::InvalidSlot(index) => {
                write!(f, "Slot {} is out of range (1-{WORD_LENGTH})", index + 1)
            }
            Self::InvalidLetter(c) => write!(f, "'{c}' is not a letter"),
            Self::TooManyPresent { present, unknown } => write!(
                f,
                "{present} position-unknown letters but only {unknown} open slots"
            ),
        }
    }
}

impl std::error::Error for ConstraintError {}

/// Keep the alphabetic characters of a free-text letter field, upper-cased,
/// first occurrence only.
#[must_use]
pub fn filter_letters_input(text: &str) -> Vec<char> {
    let mut letters = Vec::new();
    for c in text.chars().filter(char::is_ascii_alphabetic) {
        let c = c.to_ascii_uppercase();
        if !letters.contains(&c) {
            letters.push(c);
        }
    }
    letters
}

fn is_unknown_marker(c: char) -> bool {
    matches!(c, '_' | '.' | '?' | '*' | ' ')
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    known: [Option<char>; WORD_LENGTH],
    present: Vec<char>,
    excluded: Vec<char>,
}

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn known(&self) -> &[Option<char>; WORD_LENGTH] {
        &self.known
    }

    #[must_use]
    pub fn present(&self) -> &[char] {
        &self.present
    }

    #[must_use]
    pub fn excluded(&self) -> &[char] {
        &self.excluded
    }

    /// Pin `letter` at `index`, or free the slot with `None`.
    ///
    /// A pinned letter is removed from the present and excluded groups.
    ///
    /// # Errors
    /// Returns `ConstraintError::InvalidSlot` if `index >= 5`, or
    /// `ConstraintError::InvalidLetter` if `letter` is not alphabetic. The
    /// slot is left unchanged on error.
    pub fn set_known(&mut self, index: usize, letter: Option<char>) -> Result<(), ConstraintError> {
        if index >= WORD_LENGTH {
            return Err(ConstraintError::InvalidSlot(index));
        }
        if let Some(c) = letter
            && !c.is_ascii_alphabetic()
        {
            return Err(ConstraintError::InvalidLetter(c));
        }
        let letter = letter.map(|c| c.to_ascii_uppercase());
        self.known[index] = letter;
        if let Some(c) = letter {
            self.present.retain(|&p| p != c);
            self.excluded.retain(|&x| x != c);
        }
        Ok(())
    }

    /// Pin every slot from a five-character pattern such as `_RA_E`.
    ///
    /// # Errors
    /// Returns `ConstraintError::InvalidPattern` unless the pattern has exactly
    /// five characters, each a letter or one of `_ . ? *` or space.
    pub fn set_pattern(&mut self, pattern: &str) -> Result<(), ConstraintError> {
        let chars: Vec<char> = pattern.chars().collect();
        if chars.len() != WORD_LENGTH
            || !chars
                .iter()
                .all(|&c| c.is_ascii_alphabetic() || is_unknown_marker(c))
        {
            return Err(ConstraintError::InvalidPattern(pattern.to_string()));
        }
        for (index, c) in chars.into_iter().enumerate() {
            let letter = if is_unknown_marker(c) { None } else { Some(c) };
            self.set_known(index, letter)?;
        }
        Ok(())
    }

    /// Replace the present-but-unplaced letters with the letters of `text`.
    pub fn set_present(&mut self, text: &str) {
        let pinned = self.pinned_letters();
        self.present = filter_letters_input(text)
            .into_iter()
            .filter(|c| !pinned.contains(c))
            .collect();
        let present = &self.present;
        self.excluded.retain(|c| !present.contains(c));
    }

    /// Replace the excluded letters with the letters of `text`.
    pub fn set_excluded(&mut self, text: &str) {
        let pinned = self.pinned_letters();
        self.excluded = filter_letters_input(text)
            .into_iter()
            .filter(|c| !pinned.contains(c) && !self.present.contains(c))
            .collect();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Indices of the slots with no pinned letter.
    #[must_use]
    pub fn unknown_slots(&self) -> Vec<usize> {
        (0..WORD_LENGTH).filter(|&i| self.known[i].is_none()).collect()
    }

    /// True when nothing at all has been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known.iter().all(Option::is_none) && self.present.is_empty() && self.excluded.is_empty()
    }

    /// Known letters as a display string, `_` for unknown slots.
    #[must_use]
    pub fn pattern(&self) -> String {
        self.known.iter().map(|slot| slot.unwrap_or('_')).collect()
    }

    /// # Errors
    /// Returns `ConstraintError::TooManyPresent` when the present letters
    /// cannot fit into the unknown slots.
    pub fn validate(&self) -> Result<(), ConstraintError> {
        let unknown = self.unknown_slots().len();
        if self.present.len() > unknown {
            return Err(ConstraintError::TooManyPresent {
                present: self.present.len(),
                unknown,
            });
        }
        Ok(())
    }

    fn pinned_letters(&self) -> Vec<char> {
        self.known.iter().flatten().copied().collect()
    }
}
