use crate::results::GuessFeedback;
use crate::results::LetterFeedback;
use std::collections::HashMap;
use std::collections::HashSet;
use std::iter::zip;

/// Accumulated letter constraints that a candidate word must satisfy.
///
/// Feedback from each round is folded in with [`WordRestrictions::update`].
/// Constraints only ever grow within a game, so the set of words satisfying
/// them can only shrink or stay the same from round to round.
///
/// Nothing prevents the constraints from becoming contradictory (for example
/// a letter fixed at some location and also globally excluded). A
/// contradictory set simply admits no word, which surfaces as an empty
/// candidate pool at selection time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordRestrictions {
    /// Locations whose letter is known.
    fixed: HashMap<usize, char>,
    /// Letters known to be in the word, keyed by a location they must not
    /// occupy.
    misplaced: HashMap<usize, HashSet<char>>,
    /// Letters known to be absent from the word.
    excluded: HashSet<char>,
}

impl WordRestrictions {
    /// Creates a new empty `WordRestrictions` struct.
    pub fn new() -> WordRestrictions {
        WordRestrictions::default()
    }

    /// Returns the restrictions imposed by the given feedback alone.
    pub fn from_feedback(feedback: &GuessFeedback) -> WordRestrictions {
        let mut restrictions = WordRestrictions::new();
        restrictions.update(feedback);
        restrictions
    }

    /// Adds the restrictions arising from one round of feedback.
    ///
    /// Applying the same feedback more than once leaves the restrictions
    /// unchanged.
    pub fn update(&mut self, feedback: &GuessFeedback) {
        for ((index, letter), result) in zip(feedback.guess.char_indices(), feedback.letters.iter())
        {
            match result {
                LetterFeedback::Exact => {
                    self.fixed.insert(index, letter);
                }
                LetterFeedback::Present => {
                    self.misplaced.entry(index).or_default().insert(letter);
                }
                LetterFeedback::Absent => {
                    self.excluded.insert(letter);
                }
            }
        }
    }

    /// Returns `true` iff the given word satisfies every accumulated
    /// restriction.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        self.fixed
            .iter()
            .all(|(index, letter)| word.chars().nth(*index) == Some(*letter))
            && self.misplaced.iter().all(|(index, letters)| {
                letters.iter().all(|letter| {
                    word.contains(*letter) && word.chars().nth(*index) != Some(*letter)
                })
            })
            && !self
                .excluded
                .iter()
                .any(|letter| word.contains(*letter))
    }
}
