use super::{types::Config, ConfigError};

/// Narrowest column plots are wrapped at.
const MIN_WRAP_WIDTH: usize = 20;

/// Validate configuration
/// Currently validates:
/// - TMDB API key is set
/// - At least one provider attempt is allowed
/// - Wrap width is usable
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.tmdb.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "tmdb.api_key is required (set it in the config file or CINEQUIZ_TMDB__API_KEY)"
                .to_string(),
        ));
    }

    if config.retry.max_attempts == 0 {
        return Err(ConfigError::ValidationError(
            "retry.max_attempts cannot be 0".to_string(),
        ));
    }

    if config.game.wrap_width < MIN_WRAP_WIDTH {
        return Err(ConfigError::ValidationError(format!(
            "game.wrap_width must be at least {}",
            MIN_WRAP_WIDTH
        )));
    }

    Ok(())
}
