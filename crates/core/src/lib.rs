pub mod config;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod generator;
pub mod provider;
pub mod question;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
};
pub use difficulty::{DifficultyLevel, UnknownDifficulty};
pub use error::QuizError;
pub use game::{Console, Game, GameConfig, GameSummary, LineConsole, StdConsole};
pub use generator::{
    QuestionGenerator, QuestionPool, RetryCallback, RetryConfig, RetryNotice, RetryPolicy,
};
pub use provider::{
    MovieKind, MovieProvider, MovieRecord, MovieRef, ProviderError, TmdbClient, TmdbConfig,
};
pub use question::{Answer, Label, Question, QuestionKind};
