//! nWordle helper - CLI
//!
//! Plays several Wordle games at once with shared guesses, suggesting the
//! guesses that carry the most information across all of them.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use nwordle_helper::{
    commands::run_play,
    session::SessionConfig,
    wordlists::loader::load_from_file,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nwordle_helper",
    about = "Entropy-ranked guesses for several Wordle games played in parallel",
    version
)]
struct Cli {
    /// Number of games played with the same guesses
    #[arg(default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    games: u16,

    /// 'host' draws secret words and scores guesses itself
    #[arg(value_enum)]
    mode: Option<Mode>,

    /// Possible answers, one word per line
    #[arg(long, default_value = "NYT_wordle_possibles.txt")]
    answers: PathBuf,

    /// Permitted guesses, one word per line
    #[arg(long, default_value = "wordle_permitted_guesses.txt")]
    guesses: PathBuf,

    /// Word length
    #[arg(long, default_value_t = 5)]
    letters: usize,

    /// Seed for drawing secrets in host mode
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Host,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = SessionConfig {
        games: usize::from(cli.games),
        host: cli.mode == Some(Mode::Host),
    };

    let answers = load_from_file(&cli.answers, cli.letters)
        .with_context(|| format!("Failed to load answers from {}", cli.answers.display()))?;
    let guesses = load_from_file(&cli.guesses, cli.letters)
        .with_context(|| format!("Failed to load guesses from {}", cli.guesses.display()))?;
    let legal = guesses.with_answers(&answers);
    log::info!(
        "{} answers, {} legal guesses, {} games",
        answers.len(),
        legal.len(),
        config.games
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    run_play(&config, &answers, &legal, &mut rng)?;
    Ok(())
}
