//! Letter constraints derived from one guess and its feedback
//!
//! Each distinct guess letter yields one fixed-shape record. A word is
//! consistent with the feedback when it satisfies every record.

use super::{Mark, Pattern, Word};

/// What one scored guess says about a single letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterConstraint {
    pub letter: char,
    /// The secret holds at least this many copies
    pub min_count: usize,
    /// The secret holds at most this many copies (`None` = unbounded)
    pub max_count: Option<usize>,
    /// Positions that must hold the letter
    pub at: Vec<usize>,
    /// Positions that must not hold the letter
    pub not_at: Vec<usize>,
}

impl LetterConstraint {
    /// Derive one constraint per distinct letter of `guess`, in order of
    /// first appearance
    ///
    /// An absent mark only appears once every real copy of the letter has
    /// been credited, so any absent mark caps the count at the credited total.
    #[must_use]
    pub fn derive(guess: &Word, pattern: Pattern) -> Vec<Self> {
        let mut constraints: Vec<Self> = Vec::new();

        for (position, (&letter, mark)) in guess.letters().iter().zip(pattern.marks()).enumerate() {
            let index = match constraints.iter().position(|c| c.letter == letter) {
                Some(index) => index,
                None => {
                    constraints.push(Self {
                        letter,
                        min_count: 0,
                        max_count: None,
                        at: Vec::new(),
                        not_at: Vec::new(),
                    });
                    constraints.len() - 1
                }
            };
            let constraint = &mut constraints[index];

            match mark {
                Mark::Correct => {
                    constraint.min_count += 1;
                    constraint.at.push(position);
                }
                Mark::Present => {
                    constraint.min_count += 1;
                    constraint.not_at.push(position);
                }
                Mark::Absent => {
                    constraint.max_count = Some(0);
                    constraint.not_at.push(position);
                }
            }
        }

        for constraint in &mut constraints {
            if constraint.max_count.is_some() {
                constraint.max_count = Some(constraint.min_count);
            }
            constraint.not_at.sort_unstable();
        }

        constraints
    }

    /// Check whether `word` satisfies this constraint
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let count = word.count_of(self.letter);
        count >= self.min_count
            && self.max_count.is_none_or(|max| count <= max)
            && self.at.iter().all(|&i| word.letter_at(i) == self.letter)
            && self.not_at.iter().all(|&i| word.letter_at(i) != self.letter)
    }
}
