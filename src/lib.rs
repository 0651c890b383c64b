//! nWordle helper
//!
//! Suggests guesses for several Wordle games played at once with shared
//! guesses, ranking every legal word by the entropy of the feedback it would
//! produce in each game.
//!
//! # Quick Start
//!
//! ```rust
//! use nwordle_helper::core::{Pattern, Word};
//!
//! let guess = Word::new("trace").unwrap();
//! let secret = Word::new("crane").unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &secret);
//! assert_eq!(pattern.to_string(), "02212");
//! ```

// Core domain types
pub mod core;

// Filtering and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Turn loop
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
