//! Command implementations

pub mod play;

pub use play::{ConsolePlayer, run_play};
