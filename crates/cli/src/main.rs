use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cinequiz_core::{
    load_config, validate_config, DifficultyLevel, Game, QuestionGenerator, RetryNotice,
    RetryPolicy, SanitizedConfig, StdConsole, TmdbClient,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable naming the config file.
const CONFIG_ENV: &str = "CINEQUIZ_CONFIG";

/// CLI arguments for cinequiz
#[derive(Parser, Debug)]
#[command(name = "cinequiz")]
#[command(version, about = "Movie trivia in your terminal, powered by The Movie Database")]
#[command(long_about = r#"
Answer multiple-choice questions about release years, plots and directors.

Difficulty sets the number of questions and the points per correct answer:
  easy    3 questions, 1 point each
  normal  4 questions, 2 points each
  hard    5 questions, 3 points each

Configuration is loaded from (in priority order):
1. --config <path>       Explicit config file
2. $CINEQUIZ_CONFIG      Config file named by the environment
3. ./cinequiz.toml       Working directory config, if present

Any setting can be overridden with CINEQUIZ_<SECTION>__<KEY>, for example
CINEQUIZ_TMDB__API_KEY.
"#)]
struct Cli {
    /// Difficulty level (easy, normal or hard); asked interactively if omitted
    #[arg(short, long, value_name = "LEVEL")]
    difficulty: Option<DifficultyLevel>,

    /// Path to a TOML config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the random number generator, for reproducible games
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        error!("Fatal error: {:#}", e);
        println!();
        println!("Oops! Something went wrong, please restart the game.");
        std::process::exit(1);
    }
}

/// Log to stderr so diagnostics never mix with the game on stdout.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    info!("cinequiz v{}", VERSION);

    // Determine config path
    let config_path = cli
        .config
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

    // Load configuration
    let config = load_config(config_path.as_deref()).with_context(|| match &config_path {
        Some(path) => format!("Failed to load config from {:?}", path),
        None => "Failed to load config".to_string(),
    })?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;
    info!("Configuration loaded: {:?}", SanitizedConfig::from(&config));

    let provider = TmdbClient::new(config.tmdb.clone()).context("Failed to create TMDB client")?;

    let retry = RetryPolicy::from(&config.retry).with_callback(Arc::new(|_: &RetryNotice| {
        println!("!!! Connection problem, please wait !!!");
    }));

    let generator = QuestionGenerator::new(Arc::new(provider), retry)
        .with_max_rebuilds(config.game.max_rebuilds);

    let mut rng = match cli.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    println!("Welcome to cinequiz, the movie trivia game!");
    println!();

    let mut game = Game::new(generator, StdConsole::stdio(), config.game.clone());
    let summary = game.run(cli.difficulty, &mut rng).await?;

    info!(
        "Game over: {}/{} correct, score {}",
        summary.correct, summary.questions, summary.score
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "cinequiz",
            "--difficulty",
            "Hard",
            "--config",
            "quiz.toml",
            "--seed",
            "42",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.difficulty, Some(DifficultyLevel::Hard));
        assert_eq!(cli.config, Some(PathBuf::from("quiz.toml")));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cinequiz"]).unwrap();
        assert!(cli.difficulty.is_none());
        assert!(cli.config.is_none());
        assert!(cli.seed.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        assert!(Cli::try_parse_from(["cinequiz", "--difficulty", "legendary"]).is_err());
    }
}
