//! Formatting utilities for terminal output
//!
//! Everything here builds plain strings so it can be checked without a
//! terminal; [`super::display`] decides where they go.

use crate::core::{Mark, Pattern, Word};
use crate::session::Session;
use crate::solver::{CandidateSet, RankedGuess, Suggestions};

const NUMBER_WIDTH: usize = 8;

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern
        .marks()
        .map(|mark| match mark {
            Mark::Absent => '⬜',
            Mark::Present => '🟨',
            Mark::Correct => '🟩',
        })
        .collect()
}

/// Bits still needed to pin down one of `size` words, plus one for the guess
/// that confirms it
#[must_use]
pub fn uncertainty_bits(size: usize) -> Option<f64> {
    (size > 0).then(|| (size as f64).log2() + 1.0)
}

/// Information a turn produced, `None` when it emptied the set
#[must_use]
pub fn bits_gained(before: usize, after: usize) -> Option<f64> {
    (before > 0 && after > 0).then(|| (before as f64 / after as f64).log2())
}

fn bits(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

/// Column layout shared by every row of the table
struct Columns {
    label: usize,
}

impl Columns {
    fn for_length(word_length: usize) -> Self {
        Self {
            label: (word_length + 3).max(10),
        }
    }

    fn cell(&self, out: &mut String, label: &str, count: &str, bits: &str) {
        out.push_str(&format!(
            "|{label:<lw$}{count:>nw$}{bits:>nw$}  ",
            lw = self.label,
            nw = NUMBER_WIDTH
        ));
    }

    fn blank(&self, out: &mut String) {
        self.cell(out, "", "", "");
    }

    fn rule(&self, out: &mut String) {
        out.push('|');
        out.push_str(&"-".repeat(self.label + 2 * NUMBER_WIDTH));
        out.push_str("  ");
    }
}

fn end_row(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    out.push('\n');
}

/// Per-game history table, with suggestion rows when given
///
/// Rows: header, start size, one row per guess, then the remaining
/// uncertainty once at least one guess has been played.
#[must_use]
pub fn render_game_table(session: &Session<'_>, suggestions: Option<&Suggestions<'_>>) -> String {
    let games = session.games();
    let columns = Columns::for_length(session.word_length());
    let mut out = String::new();

    for game in 0..games.len() {
        columns.cell(&mut out, &format!("Game_{}", game + 1), "words", "bits");
    }
    end_row(&mut out);
    for _ in games {
        columns.rule(&mut out);
    }
    end_row(&mut out);

    for game in games {
        let start = game.size_history()[0];
        columns.cell(&mut out, " start", &start.to_string(), &bits(uncertainty_bits(start)));
    }
    end_row(&mut out);

    for (turn, record) in session.history().iter().enumerate() {
        for game in games {
            let sizes = game.size_history();
            let (before, after) = (sizes[turn], sizes[turn + 1]);
            columns.cell(
                &mut out,
                &format!(" {}", record.guess),
                &after.to_string(),
                &bits(bits_gained(before, after)),
            );
        }
        end_row(&mut out);
    }

    if session.history().is_empty() {
        return out;
    }

    for game in games {
        if game.is_solved() {
            columns.cell(&mut out, " Solved!", "", "Yay!");
        } else {
            columns.cell(&mut out, " remaining", "", &bits(uncertainty_bits(game.len())));
        }
    }
    end_row(&mut out);

    if let Some(suggestions) = suggestions {
        render_suggestions(&mut out, &columns, games, suggestions);
    }

    for (n, game) in games.iter().enumerate() {
        if game.is_empty() && !game.is_solved() {
            out.push_str(&format!("Game_{}: no viable answer, check the feedback\n", n + 1));
        }
    }

    out
}

fn render_suggestions(out: &mut String, columns: &Columns, games: &[CandidateSet<'_>], suggestions: &Suggestions<'_>) {
    for guess in &suggestions.known_answers {
        let label = format!("*{}*", guess.word);
        suggestion_row(out, columns, games, guess, &label, |game, _| !game.is_solved());
    }
    for guess in &suggestions.candidates {
        let label = format!(".{}.", guess.word);
        suggestion_row(out, columns, games, guess, &label, |game, _| {
            !game.is_solved() && game.len() >= 2
        });
    }
    for guess in &suggestions.probes {
        let label = format!("({})", guess.word);
        suggestion_row(out, columns, games, guess, &label, |game, entropy| {
            !game.is_solved() && entropy > 0.0
        });
    }
}

/// One suggestion across all games, blank where `shown` says so
fn suggestion_row(
    out: &mut String,
    columns: &Columns,
    games: &[CandidateSet<'_>],
    guess: &RankedGuess<'_>,
    label: &str,
    shown: impl Fn(&CandidateSet<'_>, f64) -> bool,
) {
    for (game, &entropy) in games.iter().zip(&guess.entropies) {
        if shown(game, entropy) {
            columns.cell(out, label, "", &format!("({entropy:.2})"));
        } else {
            columns.blank(out);
        }
    }
    end_row(out);
}

/// Host-mode line showing one game's code for a guess
#[must_use]
pub fn render_reveal(game: usize, guess: &Word, pattern: Pattern) -> String {
    format!(
        "Game_{} {} {pattern} {}",
        game + 1,
        guess.text().to_uppercase(),
        pattern_to_emoji(pattern)
    )
}
