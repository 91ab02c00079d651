//! Process configuration read once at startup.
//!
//! All settings come from the environment. A missing API key is fatal: the
//! process refuses to start rather than accepting submissions it cannot
//! analyse. Everything else has a development-friendly default.

use std::net::SocketAddr;
use std::time::Duration;

use crate::outbound::anthropic::DEFAULT_MODEL;

/// Default SQLite database path when `DIARY_DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "diary_analyzer.db";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_ANALYSIS_TIMEOUT_SECS: u64 = 30;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The Anthropic credential is absent or blank.
    #[error("ANTHROPIC_API_KEY is not set in the environment")]
    MissingApiKey,
    /// A variable is present but cannot be parsed.
    #[error("invalid {name} value {value:?}: {message}")]
    Invalid {
        /// Name of the offending environment variable.
        name: &'static str,
        /// The rejected value.
        value: String,
        /// Parse failure description.
        message: String,
    },
}

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to (`BIND_ADDR`).
    pub bind_addr: SocketAddr,
    /// SQLite database path (`DIARY_DATABASE_URL`).
    pub database_url: String,
    /// Anthropic API key (`ANTHROPIC_API_KEY`, required).
    pub api_key: String,
    /// Model identifier sent to the Messages API (`ANTHROPIC_MODEL`).
    pub model: String,
    /// Timeout applied to the outbound analysis call
    /// (`ANALYSIS_TIMEOUT_SECS`).
    pub analysis_timeout: Duration,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when `ANTHROPIC_API_KEY` is
    /// absent or blank, and [`ConfigError::Invalid`] when `BIND_ADDR` or
    /// `ANALYSIS_TIMEOUT_SECS` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("ANTHROPIC_API_KEY")
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let bind_value = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_value
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::Invalid {
                name: "BIND_ADDR",
                value: bind_value.clone(),
                message: err.to_string(),
            })?;

        let timeout_value = lookup("ANALYSIS_TIMEOUT_SECS");
        let analysis_timeout = match timeout_value {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|err| ConfigError::Invalid {
                    name: "ANALYSIS_TIMEOUT_SECS",
                    value: raw.clone(),
                    message: err.to_string(),
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_ANALYSIS_TIMEOUT_SECS),
        };

        Ok(Self {
            bind_addr,
            database_url: lookup("DIARY_DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            api_key,
            model: lookup("ANTHROPIC_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            analysis_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |name| map.get(name).map(|value| (*value).to_owned())
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let result = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingApiKey);
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let result = AppConfig::from_lookup(lookup_from(&[("ANTHROPIC_API_KEY", "   ")]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingApiKey);
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[("ANTHROPIC_API_KEY", "sk-test")]))
            .expect("config should resolve");

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.analysis_timeout, Duration::from_secs(30));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("BIND_ADDR", "0.0.0.0:9090"),
            ("DIARY_DATABASE_URL", "/tmp/diaries.db"),
            ("ANTHROPIC_MODEL", "claude-3-5-haiku-20241022"),
            ("ANALYSIS_TIMEOUT_SECS", "5"),
        ]))
        .expect("config should resolve");

        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:9090");
        assert_eq!(config.database_url, "/tmp/diaries.db");
        assert_eq!(config.model, "claude-3-5-haiku-20241022");
        assert_eq!(config.analysis_timeout, Duration::from_secs(5));
    }

    #[test]
    fn unparseable_values_are_rejected_with_the_variable_name() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("ANALYSIS_TIMEOUT_SECS", "soon"),
        ]));

        match result {
            Err(ConfigError::Invalid { name, value, .. }) => {
                assert_eq!(name, "ANALYSIS_TIMEOUT_SECS");
                assert_eq!(value, "soon");
            }
            other => panic!("expected Invalid error, got {other:?}"),
        }
    }
}
