//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DEFAULT_LOG_FILTER;
use crate::error::{AppError, AppResult};

/// Parses a filter directive, falling back to [`DEFAULT_LOG_FILTER`].
///
/// The parse error is returned alongside so the caller can report it once a
/// subscriber exists.
#[must_use]
pub fn filter_or_default(directive: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e.to_string())),
    }
}

/// Installs the global subscriber.
///
/// Events go to stderr so stdout only carries command output. An invalid
/// directive is replaced by [`DEFAULT_LOG_FILTER`] and reported as a warning.
///
/// # Errors
///
/// Returns [`AppError::Logging`] if a global subscriber is already set.
pub fn init(directive: &str) -> AppResult<()> {
    let (filter, rejected) = filter_or_default(directive);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    if let Some(error) = rejected {
        tracing::warn!(directive, %error, "invalid log filter, using {DEFAULT_LOG_FILTER}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_directive_is_kept() {
        let (filter, rejected) = filter_or_default("relstamp=debug");
        assert!(rejected.is_none());
        assert_eq!(filter.to_string(), "relstamp=debug");
    }

    #[test]
    fn test_invalid_directive_falls_back() {
        let (filter, rejected) = filter_or_default("relstamp=loudest");
        assert!(rejected.is_some());
        assert_eq!(filter.to_string(), DEFAULT_LOG_FILTER);
    }
}
