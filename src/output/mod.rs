//! Terminal output formatting
//!
//! Plain-text tables and banners for the interactive session.

pub mod display;
pub mod formatters;

pub use display::{print_game_state, print_outcome, print_reveal, print_welcome};
