use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding `EnvFilter` directives.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Environment variable selecting the log output format.
pub const FORMAT_ENV: &str = "REPERTORY_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format: {0} (expected json, pretty or compact)")]
    UnknownLogFormat(String),
}

/// How log lines are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line, with timestamps.
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(ConfigError::UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,repertory_province=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Reads [`FILTER_ENV`] and [`FORMAT_ENV`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from any key lookup; unset or empty values
    /// keep their defaults, and an unknown format falls back to JSON.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup(FILTER_ENV).filter(|v| !v.trim().is_empty()) {
            config.filter = filter;
        }

        if let Some(raw) = lookup(FORMAT_ENV).filter(|v| !v.trim().is_empty()) {
            match raw.parse() {
                Ok(format) => config.format = format,
                Err(err) => ::tracing::warn!(%err, "ignoring {FORMAT_ENV}"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_info_json() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[
            (FILTER_ENV, "debug,repertory_statement=trace"),
            (FORMAT_ENV, "Pretty"),
        ]));
        assert_eq!(config.filter, "debug,repertory_statement=trace");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn unknown_format_keeps_default() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[(FORMAT_ENV, "xml")]));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(
            "xml".parse::<LogFormat>().unwrap_err(),
            ConfigError::UnknownLogFormat("xml".to_string())
        );
    }

    #[test]
    fn deserializes_partial_config() {
        let config: ObservabilityConfig = serde_json::from_str(r#"{ "format": "compact" }"#).unwrap();
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn init_is_idempotent() {
        crate::init_with(&ObservabilityConfig::default());
        crate::init_with(&ObservabilityConfig {
            filter: "not a [valid filter".to_string(),
            format: LogFormat::Compact,
        });
    }
}
