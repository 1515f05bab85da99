//! WORDLE50 - CLI
//!
//! Guess a secret word of 5 to 8 letters in one more try than it has letters.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordle50::{
    game::{DEFAULT_MAX_RETRIES, Game, LinePrompt, play},
    output::Renderer,
    core::{MAX_LENGTH, MIN_LENGTH},
    wordlists,
};

#[derive(Parser)]
#[command(
    name = "wordle50",
    about = "Guess the secret word, one letter of feedback at a time",
    version,
    author
)]
struct Cli {
    /// Word length (5-8)
    #[arg(value_parser = clap::value_parser!(u8).range(MIN_LENGTH as i64..=MAX_LENGTH as i64))]
    length: u8,

    /// Directory holding the word lists (5.txt ... 8.txt)
    #[arg(short = 'd', long, env = "WORDLE50_WORDS_DIR", default_value = ".")]
    words_dir: PathBuf,

    /// Seed for choosing the secret word (default: OS entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Consecutive rejected guesses allowed before the game is abandoned
    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
    max_retries: usize,

    /// When to color the feedback letters
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    cli.color.apply();

    let length = usize::from(cli.length);
    let words = wordlists::load(&cli.words_dir, length)
        .with_context(|| format!("Could not load the {length}-letter word list"))?;

    // One generator per process, seeded once
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let secret = words.pick_secret(&mut rng);

    let mut game = Game::new(&words, secret);
    let mut prompt = LinePrompt::stdio(cli.max_retries);
    let mut renderer = Renderer::stdout();

    play(&mut game, &mut prompt, &mut renderer, cli.max_retries)
        .context("Game aborted by an I/O error")?;

    Ok(())
}
