use crate::data::Lexicon;
use crate::data::ScoredWord;
use crate::restrictions::WordRestrictions;
use crate::results::GuessFeedback;
use crate::results::PlayerError;
use log::debug;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use std::sync::Arc;

/// Every word in play is exactly this long.
pub const WORD_LENGTH: usize = 5;

/// The number of rounds before a game counts as lost.
pub const MAX_GUESSES: usize = 6;

/// Reported by [`GameSession::total_moves`] when every round was used without
/// finding the target.
pub const FAILED_GAME_MOVES: usize = MAX_GUESSES + 1;

/// Draws one word from the candidates, with probability proportional to each
/// candidate's popularity score.
pub fn select_guess<R: Rng>(
    candidates: &[ScoredWord],
    rng: &mut R,
) -> Result<Arc<str>, PlayerError> {
    if candidates.is_empty() {
        return Err(PlayerError::EmptyCandidateSet);
    }
    let distribution = WeightedIndex::new(candidates.iter().map(|entry| entry.score))
        .map_err(|_| PlayerError::EmptyCandidateSet)?;
    Ok(Arc::clone(&candidates[distribution.sample(rng)].word))
}

/// Plays a hidden target word by narrowing the candidate pool each round.
///
/// A session owns all per-game mutable state; the lexicon is shared and never
/// mutated. One session can be replayed against the same target: [`play`]
/// resets automatically when the previous game has finished.
///
/// [`play`]: GameSession::play
#[derive(Debug)]
pub struct GameSession {
    lexicon: Arc<Lexicon>,
    target: Arc<str>,
    candidates: Vec<ScoredWord>,
    restrictions: WordRestrictions,
    history: Vec<GuessFeedback>,
    solved: bool,
    played: bool,
}

impl GameSession {
    /// Creates a session for the given target word.
    ///
    /// The target must be [`WORD_LENGTH`] letters long and present in the
    /// lexicon; construction fails otherwise and leaves nothing behind.
    pub fn new(lexicon: Arc<Lexicon>, target: &str) -> Result<GameSession, PlayerError> {
        let target = target.to_lowercase();
        if target.len() != WORD_LENGTH {
            return Err(PlayerError::WordLength(target.len()));
        }
        if !lexicon.contains(&target) {
            return Err(PlayerError::UnknownWord(target));
        }
        let candidates = lexicon.entries().to_vec();
        Ok(GameSession {
            target: Arc::from(target.as_str()),
            candidates,
            lexicon,
            restrictions: WordRestrictions::new(),
            history: Vec::new(),
            solved: false,
            played: false,
        })
    }

    /// Creates a session with a target drawn uniformly from the answer list.
    pub fn with_random_target<R: Rng>(
        lexicon: Arc<Lexicon>,
        answers: &[String],
        rng: &mut R,
    ) -> Result<GameSession, PlayerError> {
        let target = answers.choose(rng).ok_or(PlayerError::EmptyCandidateSet)?;
        GameSession::new(lexicon, target)
    }

    /// Plays one full game, guessing until the target is found or the round
    /// budget runs out. Returns `true` iff the target was found.
    ///
    /// If the session already played a game, it is reset first.
    pub fn play<R: Rng>(&mut self, rng: &mut R) -> Result<bool, PlayerError> {
        if self.played {
            self.reset();
        }
        for round in 1..=MAX_GUESSES {
            let guess = select_guess(&self.candidates, rng)?;
            let feedback = GuessFeedback::for_target(Arc::clone(&guess), &self.target)?;
            self.restrictions.update(&feedback);
            let restrictions = &self.restrictions;
            self.candidates
                .retain(|entry| restrictions.is_satisfied_by(&entry.word));
            debug!(
                "round {}: guessed {}, {} candidates remain",
                round,
                guess,
                self.candidates.len()
            );
            self.history.push(feedback);
            if guess == self.target {
                self.solved = true;
                break;
            }
        }
        self.played = true;
        Ok(self.solved)
    }

    /// Returns the session to its initial state, keeping the same target and
    /// lexicon: the candidate pool is restored to the full lexicon and the
    /// guess history is cleared.
    pub fn reset(&mut self) {
        self.candidates = self.lexicon.entries().to_vec();
        self.restrictions = WordRestrictions::new();
        self.history.clear();
        self.solved = false;
        self.played = false;
    }

    /// The number of guesses used, or [`FAILED_GAME_MOVES`] if the game used
    /// every round without finding the target.
    pub fn total_moves(&self) -> usize {
        if !self.solved && self.history.len() == MAX_GUESSES {
            FAILED_GAME_MOVES
        } else {
            self.history.len()
        }
    }

    /// The feedback for each round played so far, in guess order.
    pub fn history(&self) -> &[GuessFeedback] {
        &self.history
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// The number of words still consistent with all feedback received.
    pub fn remaining_candidates(&self) -> usize {
        self.candidates.len()
    }
}
