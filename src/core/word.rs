//! Word representation
//!
//! A `Word` stores its normalized text plus the letters as `char`s so that
//! corpora in single-byte encodings (Latin-1) can be scored letter by letter.

use std::fmt;
use thiserror::Error;

/// Longest word a session may use.
///
/// Feedback codes are packed base-3 into a `u64`, which holds 40 digits.
pub const MAX_WORD_LENGTH: usize = 40;

/// A word from a corpus or typed as a guess
///
/// Text is lower-cased on construction; equality and hashing follow the
/// normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Box<[char]>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("word must be at most {max} letters, got {0}", max = MAX_WORD_LENGTH)]
    TooLong(usize),
    #[error("word contains a non-letter character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, longer than
    /// [`MAX_WORD_LENGTH`], or contains anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use nwordle_helper::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_lowercase();
        let letters: Box<[char]> = text.chars().collect();

        if letters.is_empty() {
            return Err(WordError::Empty);
        }
        if letters.len() > MAX_WORD_LENGTH {
            return Err(WordError::TooLong(letters.len()));
        }
        if let Some(&bad) = letters.iter().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; a `Word` has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// How many times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.letters.iter().filter(|&&c| c == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), &['c', 'r', 'a', 'n', 'e']);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CrAnE").unwrap().text(), "crane");
        assert_eq!(Word::new("CRANE").unwrap(), Word::new("crane").unwrap());
    }

    #[test]
    fn word_creation_latin1_letters() {
        let word = Word::new("ÉCOLE").unwrap();
        assert_eq!(word.text(), "école");
        assert_eq!(word.len(), 5);
        assert_eq!(word.letter_at(0), 'é');
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacter('3')));
        assert_eq!(Word::new("cra e"), Err(WordError::InvalidCharacter(' ')));
        assert_eq!(
            Word::new("a".repeat(MAX_WORD_LENGTH + 1)),
            Err(WordError::TooLong(MAX_WORD_LENGTH + 1))
        );
    }

    #[test]
    fn word_count_of() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.count_of('e'), 2);
        assert_eq!(word.count_of('s'), 1);
        assert_eq!(word.count_of('z'), 0);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
