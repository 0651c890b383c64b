//! Word lists for Wordle solving
//!
//! A [`Corpus`] is an ordered, immutable list of same-length words loaded
//! once per session and shared by reference with every game.

pub mod loader;

use crate::core::{MAX_WORD_LENGTH, Word, WordError};
use rustc_hash::FxHashMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Ordered list of words of one length, with O(1) lookup by text
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
    word_length: usize,
    index: FxHashMap<String, usize>,
}

/// Error type for word lists that cannot be used
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word length must be between 1 and {max}, got {0}", max = MAX_WORD_LENGTH)]
    UnsupportedLength(usize),
    #[error("line {line}: {source}")]
    InvalidWord {
        line: usize,
        #[source]
        source: WordError,
    },
    #[error("line {line}: '{word}' has {actual} letters, expected {expected}")]
    WordLength {
        line: usize,
        word: String,
        expected: usize,
        actual: usize,
    },
    #[error("word list holds no words")]
    Empty,
    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<CorpusError>,
    },
}

impl CorpusError {
    /// Attach the file the error came from
    #[must_use]
    pub fn in_file(self, path: &Path) -> Self {
        match self {
            Self::Io { .. } | Self::InFile { .. } => self,
            other => Self::InFile {
                path: path.to_path_buf(),
                source: Box::new(other),
            },
        }
    }
}

impl Corpus {
    /// Build a corpus from trimmed lines, one word per line
    ///
    /// Blank lines are skipped. Every other line must be a valid word of
    /// exactly `word_length` letters. Line numbers in errors start at 1.
    ///
    /// # Errors
    ///
    /// Returns a `CorpusError` on an unsupported length, an invalid or
    /// wrong-length word, or when no words remain.
    ///
    /// # Examples
    /// ```
    /// use nwordle_helper::wordlists::Corpus;
    ///
    /// let corpus = Corpus::from_lines(&["crane", "", "slate"], 5).unwrap();
    /// assert_eq!(corpus.len(), 2);
    /// assert!(corpus.get("SLATE").is_some());
    /// ```
    pub fn from_lines<S: AsRef<str>>(lines: &[S], word_length: usize) -> Result<Self, CorpusError> {
        if word_length == 0 || word_length > MAX_WORD_LENGTH {
            return Err(CorpusError::UnsupportedLength(word_length));
        }

        let mut words = Vec::with_capacity(lines.len());
        let mut blanks = 0usize;

        for (i, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if line.is_empty() {
                blanks += 1;
                continue;
            }

            let word = Word::new(line).map_err(|source| CorpusError::InvalidWord {
                line: i + 1,
                source,
            })?;
            if word.len() != word_length {
                return Err(CorpusError::WordLength {
                    line: i + 1,
                    word: line.to_string(),
                    expected: word_length,
                    actual: word.len(),
                });
            }
            words.push(word);
        }

        if blanks > 0 {
            log::debug!("skipped {blanks} blank lines");
        }
        if words.is_empty() {
            return Err(CorpusError::Empty);
        }

        let mut index = FxHashMap::default();
        for (i, word) in words.iter().enumerate() {
            index.entry(word.text().to_string()).or_insert(i);
        }

        Ok(Self {
            words,
            word_length,
            index,
        })
    }

    /// Extend a guess list so that every answer is also a legal guess
    ///
    /// Answers already present keep their position; missing ones are
    /// appended in answer order.
    #[must_use]
    pub fn with_answers(mut self, answers: &Self) -> Self {
        let mut added = 0usize;
        for answer in answers.words() {
            if answer.len() == self.word_length && !self.index.contains_key(answer.text()) {
                self.index.insert(answer.text().to_string(), self.words.len());
                self.words.push(answer.clone());
                added += 1;
            }
        }
        if added > 0 {
            log::warn!("{added} answers were missing from the guess list and have been added");
        }
        self
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Letters per word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
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

    /// Look a word up by text, ignoring case and surrounding whitespace
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let key = text.trim().to_lowercase();
        self.index.get(&key).map(|&i| &self.words[i])
    }
}
