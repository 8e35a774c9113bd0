//! Runtime configuration read from the environment.

use std::path::PathBuf;

/// Output file used when none is given on the command line.
pub const DEFAULT_OUTPUT: &str = "questions.real.json";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Converter settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub default_output: PathBuf,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_output: PathBuf::from(DEFAULT_OUTPUT),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read `QUIZ_CONVERT_OUTPUT` and `RUST_LOG`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            default_output: var("QUIZ_CONVERT_OUTPUT")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default.default_output),
            log_filter: var("RUST_LOG").unwrap_or(default.log_filter),
        }
    }

    /// Filter for the given `-v` count; zero keeps the configured filter.
    pub fn log_filter_for(&self, verbose: u8) -> &str {
        match verbose {
            0 => &self.log_filter,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        let config = Config::from_vars(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.default_output, PathBuf::from("questions.real.json"));
    }

    #[test]
    fn output_override() {
        let config = Config::from_vars(|key| match key {
            "QUIZ_CONVERT_OUTPUT" => Some("bank.json".to_string()),
            _ => None,
        });
        assert_eq!(config.default_output, PathBuf::from("bank.json"));
    }

    #[test]
    fn blank_output_override_is_ignored() {
        let config = Config::from_vars(|key| match key {
            "QUIZ_CONVERT_OUTPUT" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.default_output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn verbosity_overrides_filter() {
        let config = Config::from_vars(|key| match key {
            "RUST_LOG" => Some("quiz_convert=debug".to_string()),
            _ => None,
        });
        assert_eq!(config.log_filter_for(0), "quiz_convert=debug");
        assert_eq!(config.log_filter_for(1), "info");
        assert_eq!(config.log_filter_for(2), "debug");
        assert_eq!(config.log_filter_for(5), "trace");
    }
}
