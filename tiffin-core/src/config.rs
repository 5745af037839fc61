//! Application configuration
//!
//! Native builds read `.env` (if present) and `TIFFIN_*` environment
//! variables. Wasm builds have no runtime environment, so they use the
//! `TIFFIN_*` values captured when the crate was compiled.

use std::path::PathBuf;
use thiserror::Error;

pub const ENV_LOG: &str = "TIFFIN_LOG";
pub const ENV_MISSING_ID_FALLBACK: &str = "TIFFIN_MISSING_ID_FALLBACK";
pub const ENV_FIXTURE_PATH: &str = "TIFFIN_FIXTURE_PATH";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid log level '{0}' (expected one of trace, debug, info, warn, error)")]
    InvalidLogLevel(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Default tracing level when no filter directive is set
    pub log_level: String,
    /// Identifier substituted for a missing restaurant id. `None` routes the
    /// screen to the not-found state instead.
    pub missing_id_fallback: Option<String>,
    /// Replacement fixture document. `None` uses the embedded one.
    pub fixture_path: Option<PathBuf>,
    /// `.env` file that was read during `load`, if any
    pub env_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            missing_id_fallback: None,
            fixture_path: None,
            env_file: None,
        }
    }
}

impl Config {
    /// Load from the process environment, falling back to defaults for
    /// anything unset or invalid.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let env_file = dotenvy::dotenv().ok();
        let config = match Self::from_vars(std::env::vars()) {
            Ok(config) => config,
            Err(e) => {
                // Logging is not configured yet at this point
                eprintln!("{e}; using default configuration");
                Self::default()
            }
        };
        Self { env_file, ..config }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::from_vars(compiled_vars()).unwrap_or_else(|e| {
            eprintln!("{e}; using default configuration");
            Self::default()
        })
    }

    /// Build a config from key/value pairs. Unknown keys are ignored and empty
    /// values count as unset.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();

        for (key, value) in vars {
            let value: String = value.into();
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                ENV_LOG => {
                    let level = value.to_ascii_lowercase();
                    if !LOG_LEVELS.contains(&level.as_str()) {
                        return Err(ConfigError::InvalidLogLevel(value.to_string()));
                    }
                    config.log_level = level;
                }
                ENV_MISSING_ID_FALLBACK => {
                    config.missing_id_fallback = Some(value.to_string());
                }
                ENV_FIXTURE_PATH => {
                    config.fixture_path = Some(PathBuf::from(value));
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

/// `TIFFIN_*` variables as they were set at compile time
#[cfg(any(target_arch = "wasm32", test))]
fn compiled_vars() -> Vec<(&'static str, &'static str)> {
    [
        (ENV_LOG, option_env!("TIFFIN_LOG")),
        (ENV_MISSING_ID_FALLBACK, option_env!("TIFFIN_MISSING_ID_FALLBACK")),
        (ENV_FIXTURE_PATH, option_env!("TIFFIN_FIXTURE_PATH")),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.map(|value| (key, value)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.missing_id_fallback, None);
        assert_eq!(config.fixture_path, None);
        assert_eq!(config.env_file, None);
    }

    #[test]
    fn test_reads_tiffin_vars() {
        let config = Config::from_vars([
            ("TIFFIN_LOG", "DEBUG"),
            ("TIFFIN_MISSING_ID_FALLBACK", "1"),
            ("TIFFIN_FIXTURE_PATH", "/tmp/restaurants.json"),
            ("PATH", "/usr/bin"),
        ])
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.missing_id_fallback.as_deref(), Some("1"));
        assert_eq!(
            config.fixture_path,
            Some(PathBuf::from("/tmp/restaurants.json"))
        );
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = Config::from_vars([("TIFFIN_MISSING_ID_FALLBACK", "  ")]).unwrap();
        assert_eq!(config.missing_id_fallback, None);
    }

    #[test]
    fn test_invalid_log_level() {
        assert_eq!(
            Config::from_vars([("TIFFIN_LOG", "loud")]),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
    }

    #[test]
    fn test_compiled_vars_only_carry_tiffin_keys() {
        for (key, _) in compiled_vars() {
            assert!([ENV_LOG, ENV_MISSING_ID_FALLBACK, ENV_FIXTURE_PATH].contains(&key));
        }
    }

    #[test]
    fn test_compiled_fallback_reaches_config() {
        let vars = vec![(ENV_MISSING_ID_FALLBACK, "1")];
        let config = Config::from_vars(vars).unwrap();
        assert_eq!(config.missing_id_fallback.as_deref(), Some("1"));
    }
}
