//! Entropy ranking of legal guesses across parallel games
//!
//! Every legal guess is scored against every game; the table is ordered by
//! the summed entropy. Scoring is spread over threads with rayon, while the
//! ordering is fixed by stable sorts over the legal-guess order.

use super::CandidateSet;
use super::entropy::entropy;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::Instant;

/// One row of the entropy table
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGuess<'a> {
    pub word: &'a Word,
    /// Entropy against each game, in game order
    pub entropies: Vec<f64>,
}

impl RankedGuess<'_> {
    /// Combined score used for ranking
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entropies.iter().fold(0.0, |acc, bits| acc + bits)
    }
}

/// Legal guesses ordered by descending combined entropy
#[derive(Debug, Clone, Default)]
pub struct EntropyTable<'a> {
    rows: Vec<RankedGuess<'a>>,
}

impl<'a> EntropyTable<'a> {
    #[must_use]
    pub fn rows(&self) -> &[RankedGuess<'a>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Best-ranked guess, if any
    #[must_use]
    pub fn best(&self) -> Option<&RankedGuess<'a>> {
        self.rows.first()
    }

    /// Row for `word`, if it was ranked
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<&RankedGuess<'a>> {
        self.rows.iter().find(|row| row.word == word)
    }
}

/// Rank every legal guess not yet played
///
/// Rows are first ordered by the first game's entropy and then by the sum
/// over all games. Both sorts are stable, so equal sums keep the first
/// game's order and equal first-game scores keep the legal-guess order.
/// Entropies are compared at full precision.
#[must_use]
pub fn rank_guesses<'a>(
    legal_guesses: &'a [Word],
    games: &[CandidateSet<'_>],
    already_guessed: &FxHashSet<&Word>,
) -> EntropyTable<'a> {
    if games.is_empty() {
        return EntropyTable::default();
    }

    let start = Instant::now();
    let pool: Vec<&'a Word> = legal_guesses
        .iter()
        .filter(|word| !already_guessed.contains(word))
        .collect();

    let mut rows: Vec<RankedGuess<'a>> = pool
        .par_iter()
        .map(|&word| RankedGuess {
            word,
            entropies: games.iter().map(|game| entropy(game, word)).collect(),
        })
        .collect();

    // Only the first game's ranking affects the combined order
    rows.sort_by(|a, b| b.entropies[0].total_cmp(&a.entropies[0]));
    rows.sort_by(|a, b| b.total().total_cmp(&a.total()));

    log::debug!(
        "ranked {} guesses against {} games in {:.2?}",
        rows.len(),
        games.len(),
        start.elapsed()
    );

    EntropyTable { rows }
}
