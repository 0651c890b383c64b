//! Shannon entropy of the outcome partition a guess induces
//!
//! Given a guess and a candidate set, groups the candidates by the feedback
//! each would produce and computes the expected information gain.

use super::CandidateSet;
use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Group the remaining candidates by the pattern `guess` would produce
///
/// A solved game has nothing left to learn and yields an empty partition.
#[must_use]
pub fn partition<'a>(candidates: &CandidateSet<'a>, guess: &Word) -> FxHashMap<Pattern, Vec<&'a Word>> {
    let mut groups: FxHashMap<Pattern, Vec<&'a Word>> = FxHashMap::default();
    if candidates.is_solved() {
        return groups;
    }

    for &candidate in candidates.words() {
        groups
            .entry(Pattern::calculate(guess, candidate))
            .or_default()
            .push(candidate);
    }

    groups
}

/// Entropy of `guess` against one game, in bits
///
/// - solved game: 0
/// - one candidate left and `guess` is that word: exactly 1, so the known
///   answer outranks every probe that also scores 1 bit
/// - otherwise the Shannon entropy of the outcome partition (0 when empty)
///
/// # Examples
/// ```
/// use nwordle_helper::core::Word;
/// use nwordle_helper::solver::{CandidateSet, entropy::entropy};
/// use nwordle_helper::wordlists::Corpus;
///
/// let corpus = Corpus::from_lines(&["slate", "zzzzz"], 5).unwrap();
/// let set = CandidateSet::new(&corpus);
///
/// let guess = Word::new("slate").unwrap();
/// assert!((entropy(&set, &guess) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn entropy(candidates: &CandidateSet<'_>, guess: &Word) -> f64 {
    if candidates.is_solved() {
        return 0.0;
    }
    if let Some(only) = candidates.sole_candidate()
        && only == guess
    {
        return 1.0;
    }

    let mut counts: FxHashMap<Pattern, usize> = FxHashMap::default();
    for &candidate in candidates.words() {
        *counts.entry(Pattern::calculate(guess, candidate)).or_insert(0) += 1;
    }

    shannon_entropy(counts.values().copied())
}

/// Calculate Shannon entropy from partition sizes
///
/// H = Σ p * log₂(1/p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one partition) or no outcomes
/// - Always in range [0, log₂(n)] for n partitions
/// - Never returns negative zero, so rankings compare equal entropies equal
///
/// # Examples
/// ```
/// use nwordle_helper::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy([25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(partition_sizes: impl IntoIterator<Item = usize>) -> f64 {
    let sizes: Vec<usize> = partition_sizes.into_iter().filter(|&n| n > 0).collect();
    let total = sizes.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    sizes
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            p * (1.0 / p).log2()
        })
        .fold(0.0, |acc, bits| acc + bits)
}
