//! Errors raised while building and playing questions.

use thiserror::Error;

use crate::provider::ProviderError;
use crate::question::QuestionKind;

/// Errors that can occur while running the quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A single provider call failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The seed letter produced too few eligible movies.
    #[error("Search for '{letter}' returned only {eligible} movies")]
    PoolTooSmall { letter: char, eligible: usize },

    /// Retries ran out while talking to the provider.
    #[error("Movie provider unavailable after {attempts} attempts")]
    ProviderUnavailable {
        attempts: u32,
        #[source]
        last_error: Box<QuizError>,
    },

    /// The pool emptied before the question had four options.
    #[error("Ran out of candidate movies while building a {kind:?} question")]
    PoolExhausted { kind: QuestionKind },

    /// The player closed standard input.
    #[error("Input closed")]
    InputClosed,

    /// Console I/O error.
    #[error("Console I/O error")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// This error followed by each of its causes, separated by `: `.
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }

    /// Whether trying the same operation again may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Provider(e) => match e {
                ProviderError::HttpError(_) | ProviderError::RateLimitExceeded => true,
                ProviderError::ApiError { status, .. } => *status >= 500,
                ProviderError::NotFound(_)
                | ProviderError::ParseError(_)
                | ProviderError::NotConfigured(_) => false,
            },
            Self::PoolTooSmall { .. } => true,
            _ => false,
        }
    }
}
