//! Picture Reveal - CLI
//!
//! Guess the hidden words to uncover the picture.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use picture_reveal::{
    assets::AssetSource,
    config::{DEFAULT_PICTURE_PATH, DEFAULT_WORDS_PATH, GameConfig},
    engine::{Session, TokenGuesses},
    output::{ConsoleView, print_preview},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ffi::OsString;
use std::io;

#[derive(Parser)]
#[command(
    name = "picture_reveal",
    about = "Guess the words to reveal the hidden picture",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: path to a file with one word per line, or 'builtin'
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDS_PATH)]
    words: String,

    /// Picture: path to an ASCII-art text file, or 'builtin'
    #[arg(short = 'p', long, global = true, default_value = DEFAULT_PICTURE_PATH)]
    picture: String,

    /// Seed for the word order (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play every word in the list (default)
    Play,

    /// Show the picture as it looks with a number of letters still hidden
    Preview {
        /// Number of unguessed letters
        #[arg(short, long, default_value = "0")]
        remaining: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    // Classic `-words <path> -picture <path>` form
    if let Some(config) = GameConfig::from_legacy_os_args(&args)? {
        return run_play_command(&config);
    }

    let cli = Cli::parse();
    let mut config = GameConfig::new(
        AssetSource::from_arg(&cli.words),
        AssetSource::from_arg(&cli.picture),
    );
    config.seed = cli.seed;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::Preview { remaining } => run_preview_command(&config, remaining),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let words = config
        .words
        .load_words()
        .with_context(|| format!("failed to read word list '{}'", config.words))?;
    let grid = config
        .picture
        .load_grid()
        .with_context(|| format!("failed to read picture '{}'", config.picture))?;
    info!(
        "loaded {} words from {} and picture from {}",
        words.len(),
        config.words,
        config.picture
    );

    let stdin = io::stdin();
    let mut guesses = TokenGuesses::new(stdin.lock());
    let mut view = ConsoleView;

    let summary = match config.seed {
        Some(seed) => Session::with_rng(words, StdRng::seed_from_u64(seed))
            .wrong_budget(config.wrong_budget)
            .run(&grid, &mut guesses, &mut view)?,
        None => Session::new(words)
            .wrong_budget(config.wrong_budget)
            .run(&grid, &mut guesses, &mut view)?,
    };
    info!(
        "solved {} of {} rounds",
        summary.rounds_solved(),
        summary.rounds_played()
    );

    Ok(())
}

fn run_preview_command(config: &GameConfig, remaining: usize) -> Result<()> {
    let grid = config
        .picture
        .load_grid()
        .with_context(|| format!("failed to read picture '{}'", config.picture))?;

    print_preview(&grid.render(remaining), remaining);
    Ok(())
}
