//! Candidate filtering and entropy ranking
//!
//! One `CandidateSet` per game narrows with every feedback code; the ranker
//! scores each legal guess against all games at once.

mod candidates;
pub mod entropy;
pub mod ranker;
pub mod suggestions;

pub use candidates::CandidateSet;
pub use ranker::{EntropyTable, RankedGuess, rank_guesses};
pub use suggestions::{SUGGESTION_LIMIT, Suggestions};
