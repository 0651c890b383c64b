//! Line-based interactive play
//!
//! Prompts for guesses and feedback codes on stdin and prints the game
//! table and suggestions between turns.

use crate::core::{Feedback, Pattern, Word};
use crate::output::{print_game_state, print_outcome, print_reveal, print_welcome};
use crate::session::{GuessError, Player, Session, SessionConfig, SessionError, SessionState};
use crate::wordlists::Corpus;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Run one interactive session on stdin
///
/// # Errors
///
/// Returns `SessionError` if the session cannot be set up or input ends
/// before it is over.
pub fn run_play<R: Rng + ?Sized>(
    config: &SessionConfig,
    answers: &Corpus,
    legal: &Corpus,
    rng: &mut R,
) -> Result<SessionState, SessionError> {
    let mut session = Session::new(config, answers, legal, rng)?;
    print_welcome(config, session.word_length());

    let mut player = ConsolePlayer::new(io::stdin().lock(), session.word_length());
    session.run(&mut player)
}

/// Human player reading answers line by line
pub struct ConsolePlayer<R> {
    input: R,
    word_length: usize,
}

impl<R: BufRead> ConsolePlayer<R> {
    pub const fn new(input: R, word_length: usize) -> Self {
        Self { input, word_length }
    }

    /// Get user input with a prompt
    fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(input.trim().to_string())
    }
}

fn ranking_spinner(guesses: usize) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Ranking {guesses} guesses..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

impl<R: BufRead> Player for ConsolePlayer<R> {
    fn show(&mut self, session: &Session<'_>) {
        // The first-turn table over the full corpus is the same every game
        if session.turn() == 0 {
            print_game_state(session, None);
            return;
        }

        let spinner = ranking_spinner(session.legal().len());
        let table = session.rank();
        spinner.finish_and_clear();

        let suggestions = session.suggestions(&table);
        print_game_state(session, Some(&suggestions));
    }

    fn guess(&mut self, turn: usize, rejected: Option<&GuessError>) -> io::Result<String> {
        if let Some(err) = rejected {
            println!("{} {err}", "Invalid guess:".red());
        }
        self.prompt(&format!("Turn {turn}... Input guess"))
    }

    fn feedback(&mut self, game: usize, guess: &Word) -> io::Result<Feedback> {
        loop {
            let prompt = format!("Code for {} in Game_{}", guess.text().to_uppercase(), game + 1);
            let input = self.prompt(&prompt)?;
            match Feedback::parse(&input, self.word_length) {
                Ok(feedback) => return Ok(feedback),
                Err(err) => println!("{} {err}", "Invalid code:".red()),
            }
        }
    }

    fn reveal(&mut self, game: usize, guess: &Word, pattern: Pattern) {
        print_reveal(game, guess, pattern);
    }

    fn finish(&mut self, session: &Session<'_>) {
        print_outcome(session);
    }
}
