use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix of environment variable overrides. Nested keys use `__`, e.g.
/// `CINEQUIZ_TMDB__API_KEY`.
pub const ENV_PREFIX: &str = "CINEQUIZ_";

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "cinequiz.toml";

/// Load configuration with environment variable overrides.
///
/// An explicit `path` must exist. Without one, `cinequiz.toml` in the working
/// directory is used if present, so the game can run from the environment
/// alone.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) if !path.exists() => {
            return Err(ConfigError::FileNotFound(path.display().to_string()))
        }
        Some(path) => Toml::file(path),
        None => Toml::file(DEFAULT_CONFIG_FILE),
    };

    let config: Config = Figment::new()
        .merge(file)
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
