//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 digits:
//! - 0 = absent (letter not in the secret, or all copies already credited)
//! - 1 = present (letter in the secret, wrong position)
//! - 2 = correct (letter in the correct position)
//!
//! Position `i` contributes `digit × 3^i` to the packed value. On the wire a
//! pattern is the digit string, e.g. `"02212"`. The session-level
//! [`Feedback`] adds the all-dashes sentinel used for games that are
//! already solved.

use super::word::{MAX_WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Per-letter feedback symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Mark {
    /// Digit used in the serialized code
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    const fn from_digit(digit: u64) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Feedback pattern for one guess against one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    value: u64,
    len: u8,
}

/// Error type for malformed feedback codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback code is empty")]
    Empty,
    #[error("feedback code must be at most {max} symbols, got {0}", max = MAX_WORD_LENGTH)]
    TooLong(usize),
    #[error("invalid feedback symbol {symbol:?} at position {position} (expected 0, 1 or 2)")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("feedback code has {actual} symbols but words have {expected} letters")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("guess has {actual} letters but words have {expected} letters")]
    GuessLength { expected: usize, actual: usize },
}

impl Pattern {
    /// Build a pattern from explicit marks
    ///
    /// # Panics
    /// Panics in debug mode if more than [`MAX_WORD_LENGTH`] marks are given.
    #[must_use]
    pub fn from_marks(marks: &[Mark]) -> Self {
        debug_assert!(marks.len() <= MAX_WORD_LENGTH);
        let value = marks
            .iter()
            .rev()
            .fold(0u64, |acc, mark| acc * 3 + u64::from(mark.digit()));
        Self {
            value,
            len: marks.len() as u8,
        }
    }

    /// The all-correct pattern for words of `len` letters
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self::from_marks(&vec![Mark::Correct; len])
    }

    /// Calculate the pattern when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: exact position matches are correct
    /// 2. The secret's letters at the remaining positions form a leftover pool
    /// 3. Second pass, in index order: a remaining guess letter found in the
    ///    pool is present and consumes one copy; otherwise it is absent
    ///
    /// Earlier duplicates in the guess claim the pool first.
    ///
    /// # Examples
    /// ```
    /// use nwordle_helper::core::{Pattern, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let secret = Word::new("erase").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &secret).to_string(), "10110");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "words must share a length");

        let guess = guess.letters();
        let secret = secret.letters();
        let len = guess.len().min(secret.len());

        let mut marks = [Mark::Absent; MAX_WORD_LENGTH];
        // Bit j set once secret[j] has been matched or credited
        let mut claimed = 0u64;

        for i in 0..len {
            if guess[i] == secret[i] {
                marks[i] = Mark::Correct;
                claimed |= 1 << i;
            }
        }

        for i in 0..len {
            if marks[i] == Mark::Correct {
                continue;
            }
            if let Some(j) = (0..len).find(|&j| claimed & (1 << j) == 0 && secret[j] == guess[i]) {
                marks[i] = Mark::Present;
                claimed |= 1 << j;
            }
        }

        Self::from_marks(&marks[..len])
    }

    /// Get the packed base-3 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.value
    }

    /// Number of symbols
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// True for the zero-length pattern
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self.len > 0 && self.marks().all(|mark| mark == Mark::Correct)
    }

    /// Mark at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[must_use]
    pub fn mark(self, position: usize) -> Mark {
        assert!(position < self.len(), "position {position} out of range");
        Mark::from_digit((self.value / 3u64.pow(position as u32)) % 3)
    }

    /// Marks in position order
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        let mut rest = self.value;
        (0..self.len).map(move |_| {
            let mark = Mark::from_digit(rest % 3);
            rest /= 3;
            mark
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.digit())?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .chars()
            .enumerate()
            .map(|(position, symbol)| match symbol {
                '0' => Ok(Mark::Absent),
                '1' => Ok(Mark::Present),
                '2' => Ok(Mark::Correct),
                _ => Err(FeedbackError::InvalidSymbol { symbol, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if marks.is_empty() {
            return Err(FeedbackError::Empty);
        }
        if marks.len() > MAX_WORD_LENGTH {
            return Err(FeedbackError::TooLong(marks.len()));
        }
        Ok(Self::from_marks(&marks))
    }
}

/// Feedback for one game in one turn
///
/// `Skip` is the all-dashes sentinel: the game is already solved and the
/// guess carries no information for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Skip { len: u8 },
    Scored(Pattern),
}

impl Feedback {
    /// Sentinel for words of `len` letters
    #[must_use]
    pub const fn skip(len: usize) -> Self {
        Self::Skip { len: len as u8 }
    }

    /// Number of symbols in the serialized code
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Skip { len } => len as usize,
            Self::Scored(pattern) => pattern.len(),
        }
    }

    /// True for a zero-length code
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Parse a code and check it fits words of `word_length` letters
    ///
    /// # Errors
    /// Returns `FeedbackError` if the code is malformed or has the wrong length.
    ///
    /// # Examples
    /// ```
    /// use nwordle_helper::core::Feedback;
    ///
    /// assert!(matches!(Feedback::parse("-----", 5), Ok(Feedback::Skip { .. })));
    /// assert!(matches!(Feedback::parse("02212", 5), Ok(Feedback::Scored(_))));
    /// assert!(Feedback::parse("0221", 5).is_err());
    /// ```
    pub fn parse(code: &str, word_length: usize) -> Result<Self, FeedbackError> {
        let feedback: Self = code.parse()?;
        feedback.check_length(word_length)?;
        Ok(feedback)
    }

    /// Check the code has exactly `word_length` symbols
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` otherwise.
    pub const fn check_length(self, word_length: usize) -> Result<(), FeedbackError> {
        if self.len() == word_length {
            Ok(())
        } else {
            Err(FeedbackError::LengthMismatch {
                expected: word_length,
                actual: self.len(),
            })
        }
    }
}

impl From<Pattern> for Feedback {
    fn from(pattern: Pattern) -> Self {
        Self::Scored(pattern)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip { len } => f.write_str(&"-".repeat(usize::from(*len))),
            Self::Scored(pattern) => fmt::Display::fmt(pattern, f),
        }
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len > 0 && s.chars().all(|c| c == '-') {
            if len > MAX_WORD_LENGTH {
                return Err(FeedbackError::TooLong(len));
            }
            return Ok(Self::skip(len));
        }
        s.parse().map(Self::Scored)
    }
}
