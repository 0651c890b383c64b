//! The seam between a session and whoever is playing it

use super::{GuessError, Session};
use crate::core::{Feedback, Pattern, Word};
use std::io;

/// Source of guesses and feedback for a [`Session`]
///
/// The console implementation prompts a human; tests drive sessions with a
/// scripted one.
pub trait Player {
    /// Called at the start of every turn
    fn show(&mut self, _session: &Session<'_>) {}

    /// Next guess for `turn` (1-based)
    ///
    /// `rejected` carries the reason the previous attempt this turn was
    /// refused.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when no more input can be read.
    fn guess(&mut self, turn: usize, rejected: Option<&GuessError>) -> io::Result<String>;

    /// Feedback code for `guess` in `game` (0-based)
    ///
    /// Only asked for unsolved games when the session is not hosting.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when no more input can be read.
    fn feedback(&mut self, game: usize, guess: &Word) -> io::Result<Feedback>;

    /// Code the host scored for `guess` in `game`
    fn reveal(&mut self, _game: usize, _guess: &Word, _pattern: Pattern) {}

    /// Called once the session is over
    fn finish(&mut self, _session: &Session<'_>) {}
}
