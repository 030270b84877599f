use serde::{Deserialize, Serialize};

use crate::game::GameConfig;
use crate::generator::RetryConfig;
use crate::provider::TmdbConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub game: GameConfig,
}

/// Sanitized config for logging (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub tmdb: SanitizedTmdbConfig,
    pub retry: RetryConfig,
    pub game: GameConfig,
}

/// Sanitized TMDB config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedTmdbConfig {
    pub api_key_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub timeout_secs: u64,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            tmdb: SanitizedTmdbConfig {
                api_key_configured: !config.tmdb.api_key.is_empty(),
                base_url: config.tmdb.base_url.clone(),
                language: config.tmdb.language.clone(),
                timeout_secs: config.tmdb.timeout_secs,
            },
            retry: config.retry.clone(),
            game: config.game.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tmdb.timeout_secs, 30);
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.delay_secs, 10);
        assert_eq!(config.game.wrap_width, 70);
        assert_eq!(config.game.max_rebuilds, 3);
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[tmdb]
api_key = "abc123"
base_url = "http://localhost:8080/3"
language = "en-US"
timeout_secs = 5

[retry]
max_attempts = 2
delay_secs = 0

[game]
wrap_width = 50
max_rebuilds = 1
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.tmdb.api_key, "abc123");
        assert_eq!(
            config.tmdb.base_url.as_deref(),
            Some("http://localhost:8080/3")
        );
        assert_eq!(config.tmdb.timeout_secs, 5);
        assert_eq!(config.retry.max_attempts, 2);
        assert_eq!(config.retry.delay_secs, 0);
        assert_eq!(config.game.wrap_width, 50);
        assert_eq!(config.game.max_rebuilds, 1);
    }

    #[test]
    fn test_sanitized_config() {
        let mut config = Config::default();
        config.tmdb.api_key = "super-secret".to_string();

        let sanitized = SanitizedConfig::from(&config);
        assert!(sanitized.tmdb.api_key_configured);
        assert_eq!(sanitized.tmdb.timeout_secs, 30);
        assert!(!format!("{:?}", sanitized).contains("super-secret"));

        let sanitized = SanitizedConfig::from(&Config::default());
        assert!(!sanitized.tmdb.api_key_configured);
    }
}
