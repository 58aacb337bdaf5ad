//! Runtime configuration read from the environment.

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, AppResult};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "RELSTAMP_LOG";

/// Environment variable holding the default `info` output format.
pub const FORMAT_ENV: &str = "RELSTAMP_FORMAT";

/// Filter used when [`LOG_ENV`] is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Output format of the `info` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `key: value` line per field.
    #[default]
    Text,
    /// Pretty-printed JSON report.
    Json,
}

impl OutputFormat {
    /// Returns the format name as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::Config(format!(
                "{FORMAT_ENV} must be `text` or `json`, got `{other}`"
            ))),
        }
    }
}

/// Settings that are not part of the command line.
///
/// Values are kept as given and only interpreted by the command that needs
/// them, so a bad `RELSTAMP_FORMAT` cannot break `check` or override a
/// `--format` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    /// Raw [`FORMAT_ENV`] value, `None` when unset or empty.
    pub format: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            format: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            log_filter: get(LOG_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            format: get(FORMAT_ENV),
        }
    }

    /// Picks the `info` output format: the flag, then the environment, then text.
    ///
    /// An unusable environment value is logged and ignored.
    #[must_use]
    pub fn info_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        if let Some(format) = flag {
            return format;
        }
        match self.format.as_deref().map(str::parse::<OutputFormat>) {
            Some(Ok(format)) => format,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "ignoring {FORMAT_ENV}, using text");
                OutputFormat::Text
            }
            None => OutputFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn with_format(value: &str) -> AppConfig {
        AppConfig::from_lookup(lookup(&[("RELSTAMP_FORMAT", value)]))
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.info_format(None), OutputFormat::Text);
    }

    #[test]
    fn test_reads_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RELSTAMP_LOG", "relstamp=debug"),
            ("RELSTAMP_FORMAT", "JSON"),
        ]));
        assert_eq!(config.log_filter, "relstamp=debug");
        assert_eq!(config.info_format(None), OutputFormat::Json);
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config =
            AppConfig::from_lookup(lookup(&[("RELSTAMP_LOG", ""), ("RELSTAMP_FORMAT", "  ")]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_flag_wins_over_environment() {
        assert_eq!(
            with_format("json").info_format(Some(OutputFormat::Text)),
            OutputFormat::Text
        );
        assert_eq!(
            with_format("yaml").info_format(Some(OutputFormat::Json)),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_invalid_format_falls_back_to_text() {
        let config = with_format("yaml");
        assert_eq!(config.format.as_deref(), Some("yaml"));
        assert_eq!(config.info_format(None), OutputFormat::Text);
    }

    #[test]
    fn test_format_parse_error_names_value() {
        let result = "yaml".parse::<OutputFormat>();
        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("yaml")));
    }
}
