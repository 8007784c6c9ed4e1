use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::engine::WORD_LENGTH;

/// The verdict for a single letter of a guess at a specific location.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LetterFeedback {
    /// The letter is in the target word at this location.
    Exact,
    /// The letter is somewhere in the target word, but not at this location.
    Present,
    /// The letter is not in the target word.
    Absent,
}

/// Indicates that an error occurred while setting up or playing a game.
#[derive(Debug, PartialEq, Clone)]
pub enum PlayerError {
    /// The requested word-list variant does not exist.
    UnknownVariant(String),
    /// The target word's length differs from the supported word length.
    WordLength(usize),
    /// The target word is not in the loaded word list.
    UnknownWord(String),
    /// Filtering eliminated every candidate before the target was found.
    EmptyCandidateSet,
    /// A guess and target of different lengths were compared.
    LengthMismatch { guess: usize, target: usize },
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::UnknownVariant(variant) => write!(
                f,
                "{} is not a valid variant; use \"new\" or \"old\"",
                variant
            ),
            PlayerError::WordLength(length) => write!(
                f,
                "expected a {}-letter word, got {} letters",
                WORD_LENGTH, length
            ),
            PlayerError::UnknownWord(word) => {
                write!(f, "{} is not in the list of possible words", word)
            }
            PlayerError::EmptyCandidateSet => {
                write!(f, "no candidate words remain")
            }
            PlayerError::LengthMismatch { guess, target } => write!(
                f,
                "guess length ({}) does not match target length ({})",
                guess, target
            ),
        }
    }
}

impl Error for PlayerError {}

/// Determines the per-letter feedback for the given `guess` against the given
/// `target`.
///
/// The presence rule is membership based: a letter that occurs anywhere in the
/// target but not at this location is marked `Present`, even when every
/// occurrence of that letter was already matched elsewhere in the guess. For
/// targets with repeated letters this overcounts compared to the official
/// game, and that behavior is kept.
pub fn get_feedback(guess: &str, target: &str) -> Result<Vec<LetterFeedback>, PlayerError> {
    if guess.len() != target.len() {
        return Err(PlayerError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }
    Ok(guess
        .char_indices()
        .map(|(index, letter)| {
            if target.chars().nth(index) == Some(letter) {
                return LetterFeedback::Exact;
            }
            if target.contains(letter) {
                return LetterFeedback::Present;
            }
            LetterFeedback::Absent
        })
        .collect())
}

/// One round of play: a guessed word along with its per-letter feedback.
#[derive(Debug, PartialEq, Clone)]
pub struct GuessFeedback {
    pub guess: Arc<str>,
    /// The feedback for each letter, in the same letter order as in the guess.
    pub letters: Vec<LetterFeedback>,
}

impl GuessFeedback {
    /// Evaluates the guess against the target and couples the two.
    pub fn for_target(guess: Arc<str>, target: &str) -> Result<GuessFeedback, PlayerError> {
        let letters = get_feedback(&guess, target)?;
        Ok(GuessFeedback { guess, letters })
    }
}
