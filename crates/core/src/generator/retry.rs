//! Fixed-delay retry policy for provider calls.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::QuizError;

/// Retry configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetryConfig {
    /// Total attempts, including the first one.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay between attempts in seconds.
    #[serde(default = "default_delay")]
    pub delay_secs: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_delay() -> u64 {
    10
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_secs: default_delay(),
        }
    }
}

/// Details of a failed attempt that is about to be retried.
#[derive(Debug, Clone)]
pub struct RetryNotice {
    pub operation: String,
    /// The attempt that just failed (1-indexed).
    pub attempt: u32,
    pub max_attempts: u32,
    pub delay: Duration,
    pub error: String,
}

/// Called before sleeping ahead of a retry.
pub type RetryCallback = Arc<dyn Fn(&RetryNotice) + Send + Sync>;

/// Run an operation up to `max_attempts` times with a fixed delay in between.
///
/// Only errors for which [`QuizError::is_retryable`] holds are retried. When
/// the attempts run out the last error is wrapped in
/// [`QuizError::ProviderUnavailable`].
#[derive(Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
    on_retry: Option<RetryCallback>,
}

impl std::fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_attempts", &self.max_attempts)
            .field("delay", &self.delay)
            .field("has_callback", &self.on_retry.is_some())
            .finish()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(config.max_attempts, Duration::from_secs(config.delay_secs))
    }
}

impl RetryPolicy {
    /// Create a policy. At least one attempt is always made.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
            on_retry: None,
        }
    }

    /// Policy without delays, for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO)
    }

    /// Sets a callback invoked before each retry.
    pub fn with_callback(mut self, callback: RetryCallback) -> Self {
        self.on_retry = Some(callback);
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `op`, passing it the 1-indexed attempt number.
    pub async fn run<T, F, Fut>(&self, operation: &str, mut op: F) -> Result<T, QuizError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, QuizError>>,
    {
        let mut attempt = 1;
        loop {
            let error = match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) if !e.is_retryable() => return Err(e),
                Err(e) => e,
            };

            if attempt >= self.max_attempts {
                return Err(QuizError::ProviderUnavailable {
                    attempts: attempt,
                    last_error: Box::new(error),
                });
            }

            warn!(
                "{} failed (attempt {}/{}): {}; retrying in {:?}",
                operation,
                attempt,
                self.max_attempts,
                error.describe(),
                self.delay
            );

            if let Some(callback) = &self.on_retry {
                callback(&RetryNotice {
                    operation: operation.to_string(),
                    attempt,
                    max_attempts: self.max_attempts,
                    delay: self.delay,
                    error: error.describe(),
                });
            }

            tokio::time::sleep(self.delay).await;
            attempt += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn transient() -> QuizError {
        QuizError::Provider(ProviderError::RateLimitExceeded)
    }

    #[test]
    fn test_default_config() {
        let config = RetryConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.delay_secs, 10);

        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.delay(), Duration::from_secs(10));
    }

    #[test]
    fn test_zero_attempts_clamped() {
        assert_eq!(RetryPolicy::immediate(0).max_attempts(), 1);
    }

    #[tokio::test]
    async fn test_succeeds_after_failures() {
        let policy = RetryPolicy::immediate(3);
        let result = policy
            .run("op", |attempt| async move {
                if attempt < 3 {
                    Err(transient())
                } else {
                    Ok(attempt)
                }
            })
            .await;
        assert_eq!(result.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_exhaustion_wraps_last_error() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::immediate(3);
        let result: Result<(), _> = policy
            .run("op", |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(transient()) }
            })
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        match result {
            Err(QuizError::ProviderUnavailable {
                attempts,
                last_error,
            }) => {
                assert_eq!(attempts, 3);
                assert!(matches!(
                    *last_error,
                    QuizError::Provider(ProviderError::RateLimitExceeded)
                ));
            }
            other => panic!("Expected ProviderUnavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_retryable_error_returns_immediately() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::immediate(3);
        let result: Result<(), _> = policy
            .run("op", |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(QuizError::Provider(ProviderError::NotConfigured("key".into()))) }
            })
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(
            result,
            Err(QuizError::Provider(ProviderError::NotConfigured(_)))
        ));
    }

    #[tokio::test]
    async fn test_callback_sees_each_retry() {
        let notices = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&notices);
        let policy = RetryPolicy::immediate(3).with_callback(Arc::new(move |n: &RetryNotice| {
            sink.lock().unwrap().push(n.attempt);
        }));

        let _: Result<(), _> = policy.run("op", |_| async { Err(transient()) }).await;

        // No callback after the final attempt
        assert_eq!(*notices.lock().unwrap(), vec![1, 2]);
    }
}
