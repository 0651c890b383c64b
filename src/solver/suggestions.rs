//! Display buckets drawn from an entropy table

use super::CandidateSet;
use super::ranker::{EntropyTable, RankedGuess};
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Rows shown per bucket
pub const SUGGESTION_LIMIT: usize = 6;

/// Ranked guesses split by what they could be
#[derive(Debug, Clone, Default)]
pub struct Suggestions<'a> {
    /// Sole remaining candidate of some unsolved game
    pub known_answers: Vec<RankedGuess<'a>>,
    /// Still possible in at least one unsolved game
    pub candidates: Vec<RankedGuess<'a>>,
    /// Not possible anywhere, played only for information
    pub probes: Vec<RankedGuess<'a>>,
}

impl<'a> Suggestions<'a> {
    /// Split `table` into buckets of at most `limit` rows, keeping table order
    ///
    /// Known answers are also live candidates and appear in both buckets.
    #[must_use]
    pub fn from_table(table: &EntropyTable<'a>, games: &[CandidateSet<'_>], limit: usize) -> Self {
        let unsolved = || games.iter().filter(|game| !game.is_solved());
        let live: FxHashSet<&Word> = unsolved().flat_map(|game| game.words().iter().copied()).collect();
        let known: FxHashSet<&Word> = unsolved().filter_map(CandidateSet::sole_candidate).collect();

        let mut suggestions = Self::default();
        for row in table.rows() {
            if known.contains(row.word) && suggestions.known_answers.len() < limit {
                suggestions.known_answers.push(row.clone());
            }
            if live.contains(row.word) {
                if suggestions.candidates.len() < limit {
                    suggestions.candidates.push(row.clone());
                }
            } else if suggestions.probes.len() < limit {
                suggestions.probes.push(row.clone());
            }

            if suggestions.known_answers.len() == known.len().min(limit)
                && suggestions.candidates.len() == limit
                && suggestions.probes.len() == limit
            {
                break;
            }
        }
        suggestions
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known_answers.is_empty() && self.candidates.is_empty() && self.probes.is_empty()
    }
}
