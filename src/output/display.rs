//! Printing for the interactive session

use super::formatters::{render_game_table, render_reveal};
use crate::core::{Pattern, Word};
use crate::session::{Session, SessionConfig, SessionState};
use crate::solver::Suggestions;
use colored::Colorize;

/// Print the opening banner
pub fn print_welcome(config: &SessionConfig, word_length: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "nWordle helper:".bright_cyan().bold(),
        format!("{} games, {} turns", config.games, config.max_turns()).bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    if config.host {
        println!("\nSecrets have been drawn; codes are shown after each guess.");
    } else {
        println!("\nAfter each guess, enter the code for every game:");
        println!("  - 0 not in the word, 1 wrong position, 2 correct position");
        println!("  - {} for a game that is already solved", "-".repeat(word_length));
    }
}

/// Print the history table and, after the first turn, the suggestions
pub fn print_game_state(session: &Session<'_>, suggestions: Option<&Suggestions<'_>>) {
    println!("\n{}", render_game_table(session, suggestions));
}

/// Print the code a hosted game produced
pub fn print_reveal(game: usize, guess: &Word, pattern: Pattern) {
    let line = render_reveal(game, guess, pattern);
    if pattern.is_perfect() {
        println!("{}", line.green().bold());
    } else {
        println!("{line}");
    }
}

/// Print the final banner, and the secrets when hosting
pub fn print_outcome(session: &Session<'_>) {
    println!();
    match session.state() {
        SessionState::Won { turns } => {
            println!("{}", format!("You won in {turns} turns!!").green().bold());
        }
        SessionState::OutOfTurns { .. } => {
            println!("{}", "You ran out of turns!".red().bold());
        }
        SessionState::InProgress => {}
    }

    if let Some(secrets) = session.secrets() {
        for (game, (secret, set)) in secrets.iter().zip(session.games()).enumerate() {
            let word = secret.text().to_uppercase();
            let word = if set.is_solved() { word.green() } else { word.yellow() };
            println!("  Game_{}: {word}", game + 1);
        }
    }
}
