//! Candidate set for one game
//!
//! Holds the answers still consistent with every feedback code seen so far.

use crate::core::{Feedback, FeedbackError, LetterConstraint, Word};
use crate::wordlists::Corpus;

/// Words still possible for one game, plus per-turn size history
///
/// `size_history[0]` is the corpus size; entry `t` is the size right after
/// turn `t`'s feedback. Once solved, further feedback is treated as the
/// skip sentinel.
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    words: Vec<&'a Word>,
    word_length: usize,
    solved: bool,
    size_history: Vec<usize>,
}

impl<'a> CandidateSet<'a> {
    /// Start a game with every word of the answer corpus
    #[must_use]
    pub fn new(corpus: &'a Corpus) -> Self {
        let words: Vec<&'a Word> = corpus.words().iter().collect();
        let size_history = vec![words.len()];
        Self {
            words,
            word_length: corpus.word_length(),
            solved: false,
            size_history,
        }
    }

    /// Narrow the set with one guess and its feedback
    ///
    /// Returns the number of words left. An all-correct code marks the game
    /// solved. Contradictory feedback may empty the set; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackError` if the guess or code does not match the word
    /// length. The set and its history are left untouched in that case.
    pub fn apply_feedback(&mut self, guess: &Word, feedback: Feedback) -> Result<usize, FeedbackError> {
        if guess.len() != self.word_length {
            return Err(FeedbackError::GuessLength {
                expected: self.word_length,
                actual: guess.len(),
            });
        }
        feedback.check_length(self.word_length)?;

        let before = self.words.len();
        match feedback {
            Feedback::Skip { .. } => {}
            Feedback::Scored(_) if self.solved => {
                log::debug!("ignoring {feedback} for {guess}: game already solved");
            }
            Feedback::Scored(pattern) => {
                if pattern.is_perfect() {
                    self.solved = true;
                }
                let constraints = LetterConstraint::derive(guess, pattern);
                self.words
                    .retain(|word| constraints.iter().all(|c| c.admits(word)));
            }
        }

        let after = self.words.len();
        self.size_history.push(after);
        log::debug!("{guess} {feedback}: {before} -> {after} candidates");
        if after == 0 && before > 0 {
            log::warn!("no candidates fit {guess} {feedback}");
        }

        Ok(after)
    }

    /// Remaining words in corpus order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Set size at the start and after every turn
    #[inline]
    #[must_use]
    pub fn size_history(&self) -> &[usize] {
        &self.size_history
    }

    /// The answer, when exactly one word is left
    #[must_use]
    pub fn sole_candidate(&self) -> Option<&'a Word> {
        match self.words.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.iter().any(|&w| w == word)
    }
}
