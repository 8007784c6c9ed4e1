use crate::engine::WORD_LENGTH;
use crate::results::PlayerError;
use std::io::BufRead;
use std::io::Result;
use std::str::FromStr;
use std::sync::Arc;

/// Identifies which generation of word lists to load.
///
/// The two variants map to disjoint word-list/answer-list file pairs.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ListVariant {
    /// The current word lists.
    New,
    /// The word lists from the original site.
    Old,
}

impl ListVariant {
    /// The file holding every guessable word for this variant.
    pub fn word_list_file(&self) -> &'static str {
        match self {
            ListVariant::New => "wordle.txt",
            ListVariant::Old => "wordle_old.txt",
        }
    }

    /// The file holding the words that can be chosen as an answer.
    pub fn answer_list_file(&self) -> &'static str {
        match self {
            ListVariant::New => "wordle_answers.txt",
            ListVariant::Old => "wordle_answers_old.txt",
        }
    }
}

impl FromStr for ListVariant {
    type Err = PlayerError;

    fn from_str(variant: &str) -> std::result::Result<Self, Self::Err> {
        match variant {
            "new" => Ok(ListVariant::New),
            "old" => Ok(ListVariant::Old),
            _ => Err(PlayerError::UnknownVariant(variant.to_string())),
        }
    }
}

/// A word along with its popularity score. Higher scores mean more common
/// words.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: Arc<str>,
    pub score: f64,
}

// The upstream frequency source reports 0.0 for words it has never seen;
// raising those to a floor keeps every word selectable.
const MIN_SCORE: f64 = 1e-3;

/// Contains all the possible words for this game, each carrying a popularity
/// score.
///
/// A `Lexicon` is shared read-only between game sessions and is never mutated
/// after construction.
#[derive(Debug)]
pub struct Lexicon {
    entries: Vec<ScoredWord>,
}

impl Lexicon {
    /// Constructs a new `Lexicon` from words and their popularity scores.
    ///
    /// Words are converted to lower case, sorted, and deduplicated. Words
    /// whose length differs from [`WORD_LENGTH`] are dropped, as are
    /// duplicates. Non-positive scores are raised to a small floor so that
    /// every word keeps a nonzero selection probability.
    pub fn new<I, S>(scored_words: I) -> Lexicon
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut entries: Vec<ScoredWord> = scored_words
            .into_iter()
            .filter_map(|(word, score)| {
                let word = word.as_ref().to_lowercase();
                if word.len() != WORD_LENGTH {
                    return None;
                }
                Some(ScoredWord {
                    word: Arc::from(word.as_str()),
                    score: score.max(MIN_SCORE),
                })
            })
            .collect();
        entries.sort_by(|a, b| a.word.cmp(&b.word));
        entries.dedup_by(|a, b| a.word == b.word);
        Lexicon { entries }
    }

    /// Constructs a new `Lexicon` by reading a word list from the given
    /// reader and scoring each word with the provided lookup.
    pub fn from_reader<R, F>(word_reader: &mut R, score_of: F) -> Result<Lexicon>
    where
        R: BufRead,
        F: Fn(&str) -> f64,
    {
        let words = read_word_list(word_reader)?;
        Ok(Lexicon::new(words.into_iter().map(|word| {
            let score = score_of(&word);
            (word, score)
        })))
    }

    /// Retrieves the full list of words with their scores, sorted by word.
    pub fn entries(&self) -> &[ScoredWord] {
        &self.entries
    }

    /// Returns `true` iff the given word is in the lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.entries
            .binary_search_by(|entry| entry.word.as_ref().cmp(word))
            .is_ok()
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reads a word list from the given reader.
///
/// Words may be separated by commas, newlines, or both. Each word is trimmed
/// and converted to lower case; the result is sorted and deduplicated.
pub fn read_word_list<R: BufRead>(reader: &mut R) -> Result<Vec<String>> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    let mut words: Vec<String> = contents
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter_map(|raw| {
            let word = raw.trim();
            if word.is_empty() {
                return None;
            }
            Some(word.to_lowercase())
        })
        .collect();
    words.sort_unstable();
    words.dedup();
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn lexicon_sorts_and_scores_words() {
        let lexicon = Lexicon::new(vec![("crane", 5.5), ("angle", 2.0), ("banjo", 3.0)]);

        let words: Vec<&str> = lexicon
            .entries()
            .iter()
            .map(|entry| entry.word.as_ref())
            .collect();
        assert_eq!(words, vec!["angle", "banjo", "crane"]);
        assert_eq!(lexicon.entries()[0].score, 2.0);
        assert_eq!(lexicon.entries()[2].score, 5.5);
    }

    #[test]
    fn lexicon_lowercases_and_dedups() {
        let lexicon = Lexicon::new(vec![("Apple", 2.0), ("apple", 3.0), ("ANGLE", 1.0)]);

        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("apple"));
        assert!(lexicon.contains("angle"));
    }

    #[test]
    fn lexicon_drops_words_of_the_wrong_length() {
        let lexicon = Lexicon::new(vec![("axle", 4.0), ("angle", 1.0), ("axles", 1.0)]);

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.contains("axle"), false);
    }

    #[test]
    fn lexicon_raises_non_positive_scores() {
        let lexicon = Lexicon::new(vec![("angle", 0.0), ("crane", -1.0)]);

        assert!(lexicon.entries().iter().all(|entry| entry.score > 0.0));
    }

    #[test]
    fn lexicon_from_reader_scores_with_lookup() -> Result<()> {
        let mut cursor = Cursor::new(String::from("angle, apple, ankle"));

        let lexicon = Lexicon::from_reader(&mut cursor, |word| {
            if word == "apple" {
                9.0
            } else {
                1.0
            }
        })?;

        assert_eq!(lexicon.len(), 3);
        let apple = &lexicon.entries()[2];
        assert_eq!(apple.word.as_ref(), "apple");
        assert_eq!(apple.score, 9.0);
        Ok(())
    }

    #[test]
    fn read_word_list_comma_separated() -> Result<()> {
        let mut cursor = Cursor::new(String::from("crane, apple, banjo"));

        let words = read_word_list(&mut cursor)?;

        assert_eq!(words, vec!["apple", "banjo", "crane"]);
        Ok(())
    }

    #[test]
    fn read_word_list_line_separated() -> Result<()> {
        let mut cursor = Cursor::new(String::from("Crane\napple\n\nBANJO\n"));

        let words = read_word_list(&mut cursor)?;

        assert_eq!(words, vec!["apple", "banjo", "crane"]);
        Ok(())
    }

    #[test]
    fn list_variant_file_pairs() {
        assert_eq!(ListVariant::New.word_list_file(), "wordle.txt");
        assert_eq!(ListVariant::New.answer_list_file(), "wordle_answers.txt");
        assert_eq!(ListVariant::Old.word_list_file(), "wordle_old.txt");
        assert_eq!(ListVariant::Old.answer_list_file(), "wordle_answers_old.txt");
    }

    #[test]
    fn list_variant_from_str() {
        assert_eq!(ListVariant::from_str("new"), Ok(ListVariant::New));
        assert_eq!(ListVariant::from_str("old"), Ok(ListVariant::Old));
        assert_eq!(
            ListVariant::from_str("ancient"),
            Err(PlayerError::UnknownVariant("ancient".to_string()))
        );
    }
}
