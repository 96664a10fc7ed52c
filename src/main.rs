//! yawdle - CLI
//!
//! Seeded word-guessing game with TUI and text modes, challenge reveal and
//! selection statistics.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use yawdle::{
    challenge::{Challenge, ShareLink},
    commands::{reveal_link, run_simple, sample_distribution},
    config::{DEFAULT_ATTEMPTS_LIMIT, DEFAULT_BASE_URL, GameConfig, RANDOM_BIAS},
    game::{FileStore, Game, Seed},
    output::{print_distribution, print_reveal_result, print_share},
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "yawdle",
    about = "Seeded word-guessing game with encrypted challenge links",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle seed (default: from --link, otherwise random)
    #[arg(short, long, global = true)]
    seed: Option<String>,

    /// Share link or query string to open (seed, challenge, summary)
    #[arg(short, long, global = true)]
    link: Option<String>,

    /// Word list file of `word frequency` lines (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// JSON file where attempts are saved per seed
    #[arg(
        long,
        global = true,
        env = "YAWDLE_STORE",
        default_value = ".yawdle/attempts.json"
    )]
    store: PathBuf,

    /// Number of attempts per puzzle
    #[arg(short, long, global = true, default_value_t = DEFAULT_ATTEMPTS_LIMIT)]
    attempts: usize,

    /// Bias exponent toward frequent words (1.0 = uniform over buckets)
    #[arg(long, global = true, default_value_t = RANDOM_BIAS)]
    bias: f64,

    /// Base URL for share links
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (one guess per line)
    Simple,

    /// Open a challenge link with a guessed solution
    Reveal {
        /// Challenge link or query string
        link: String,

        /// The solution word
        solution: String,
    },

    /// Show how often each frequency bucket is selected
    Distribution {
        /// Number of seeds to sample
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,
    },
}

fn init_logging(command: &Commands) {
    // The TUI owns the terminal, so it stays quiet unless asked
    let default = if matches!(command, Commands::Play) {
        "off"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("YAWDLE_LOG", default)).init();
}

/// Load the word list from `--words`, or the embedded one
fn load_words(path: Option<&PathBuf>) -> Result<WordList> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load word list {}", path.display())),
        None => WordList::embedded()
            .cloned()
            .context("embedded word list is invalid"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);
    init_logging(&command);

    let words = load_words(cli.words.as_ref())?;
    let config = GameConfig::new()
        .with_attempts_limit(cli.attempts)
        .with_random_bias(cli.bias)
        .with_base_url(cli.base_url.clone());

    match command {
        Commands::Play => run_play_command(&cli, &words, config),
        Commands::Simple => run_simple_command(&cli, &words, config),
        Commands::Reveal { link, solution } => run_reveal_command(&link, &solution),
        Commands::Distribution { count } => {
            run_distribution_command(&words, config.random_bias, count);
            Ok(())
        }
    }
}

/// Resolve the seed and any received challenge from `--seed` and `--link`
///
/// An explicit seed wins over the link's. A challenge is only kept when it
/// belongs to the puzzle being played.
fn resolve_puzzle(cli: &Cli) -> Result<(Seed, Option<Challenge>)> {
    let link = cli
        .link
        .as_deref()
        .map(ShareLink::parse)
        .transpose()
        .context("invalid --link")?;

    let seed = cli
        .seed
        .clone()
        .map(Seed::new)
        .or_else(|| link.as_ref().map(|link| link.seed.clone()))
        .unwrap_or_else(Seed::random);

    let challenge = link
        .as_ref()
        .filter(|link| link.seed == seed)
        .and_then(Challenge::from_link);

    Ok((seed, challenge))
}

fn run_play_command(cli: &Cli, words: &WordList, config: GameConfig) -> Result<()> {
    use yawdle::interactive::{App, run_tui};

    let (seed, challenge) = resolve_puzzle(cli)?;
    let store = FileStore::new(&cli.store);
    let game = Game::new(words, store, config, seed);

    let app = App::new(game, challenge);
    if let Some(message) = run_tui(app)? {
        print_share(&message);
    }
    Ok(())
}

fn run_simple_command(cli: &Cli, words: &WordList, config: GameConfig) -> Result<()> {
    let (seed, challenge) = resolve_puzzle(cli)?;
    let store = FileStore::new(&cli.store);
    let mut game = Game::new(words, store, config, seed);

    run_simple(&mut game, challenge).map_err(|e| anyhow!(e))
}

fn run_reveal_command(link: &str, solution: &str) -> Result<()> {
    let result = reveal_link(link, solution).map_err(|e| anyhow!(e))?;
    print_reveal_result(&result);
    Ok(())
}

fn run_distribution_command(words: &WordList, bias: f64, count: usize) {
    println!("Sampling {count} seeds over {} words...", words.len());
    let dist = sample_distribution(words, bias, count, true);
    print_distribution(&dist);
}
