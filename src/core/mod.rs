//! Core domain types for Wordle
//!
//! Words, feedback patterns and the letter constraints a pattern implies.
//! Everything here is pure and shared by the solver and the session.

mod constraint;
mod pattern;
mod word;

pub use constraint::LetterConstraint;
pub use pattern::{Feedback, FeedbackError, Mark, Pattern};
pub use word::{MAX_WORD_LENGTH, Word, WordError};
