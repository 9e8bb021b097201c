//! Tool configuration read from the environment.
//!
//! `GHERKIN_GLOSSARY_LOG_LEVEL` and `GHERKIN_GLOSSARY_JSON_INDENT` supply the
//! defaults for a run; command line flags override them. Blank variables are
//! treated as unset.

use std::env;

use tracing_subscriber::filter::LevelFilter;

use crate::error::CliError;

/// Variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "GHERKIN_GLOSSARY_LOG_LEVEL";

/// Variable holding the JSON indent width.
pub const JSON_INDENT_VAR: &str = "GHERKIN_GLOSSARY_JSON_INDENT";

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;
const DEFAULT_JSON_INDENT: usize = 2;
const MAX_JSON_INDENT: usize = 16;

/// Settings shared by every stage of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Most verbose level logged by the glossary crates.
    ///
    /// `info` reports run milestones, `debug` adds per-file and per-stage
    /// summaries, and `trace` adds every conjunction resolution and custom
    /// type substitution.
    pub log_level: LevelFilter,
    /// Spaces per indent level in every JSON document written.
    pub json_indent: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            json_indent: DEFAULT_JSON_INDENT,
        }
    }
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid
    /// value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());

        let log_level = read(LOG_LEVEL_VAR)
            .map(|val| parse_log_level(&val))
            .transpose()?
            .unwrap_or(DEFAULT_LOG_LEVEL);

        let json_indent = read(JSON_INDENT_VAR)
            .map(|val| parse_indent(&val))
            .transpose()?
            .unwrap_or(DEFAULT_JSON_INDENT);

        Ok(Self {
            log_level,
            json_indent,
        })
    }

    /// Apply command line overrides, which win over the environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if the indent override is out of
    /// range.
    pub fn apply_overrides(
        mut self,
        log_level: Option<LevelFilter>,
        json_indent: Option<usize>,
    ) -> Result<Self, CliError> {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(indent) = json_indent {
            self.json_indent = check_indent(indent)?;
        }

        Ok(self)
    }
}

/// Parse a log level name: `off`, `error`, `warn`, `info`, `debug`, or
/// `trace`, in any case.
///
/// # Errors
///
/// Returns `CliError::InvalidConfig` naming the accepted values.
pub fn parse_log_level(val: &str) -> Result<LevelFilter, CliError> {
    val.trim().parse().map_err(|_| {
        CliError::InvalidConfig(format!(
            "unknown log level '{val}', expected one of: off, error, warn, info, debug, trace"
        ))
    })
}

fn parse_indent(val: &str) -> Result<usize, CliError> {
    let indent = val.trim().parse().map_err(|_| {
        CliError::InvalidConfig(format!(
            "invalid JSON indent '{val}', expected a non-negative integer"
        ))
    })?;
    check_indent(indent)
}

fn check_indent(indent: usize) -> Result<usize, CliError> {
    if indent > MAX_JSON_INDENT {
        return Err(CliError::InvalidConfig(format!(
            "JSON indent {indent} exceeds the maximum of {MAX_JSON_INDENT}"
        )));
    }
    Ok(indent)
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    #[case("trace", LevelFilter::TRACE)]
    #[case("debug", LevelFilter::DEBUG)]
    #[case("info", LevelFilter::INFO)]
    #[case("warn", LevelFilter::WARN)]
    #[case("error", LevelFilter::ERROR)]
    #[case("off", LevelFilter::OFF)]
    #[case("TRACE", LevelFilter::TRACE)]
    #[case(" Debug ", LevelFilter::DEBUG)]
    fn parses_log_levels(#[case] input: &str, #[case] expected: LevelFilter) {
        assert_eq!(parse_log_level(input).ok(), Some(expected));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = parse_log_level("loud").unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig(_)));
        assert!(err.to_string().contains("unknown log level 'loud'"));
    }

    #[test]
    fn config_default_values() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LevelFilter::INFO);
        assert_eq!(config.json_indent, 2);
    }

    #[test]
    fn reads_values_from_lookup() {
        let lookup = lookup_from(&[(LOG_LEVEL_VAR, "debug"), (JSON_INDENT_VAR, " 4 ")]);
        let config = CliConfig::from_lookup(lookup).unwrap();
        assert_eq!(config.log_level, LevelFilter::DEBUG);
        assert_eq!(config.json_indent, 4);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[(LOG_LEVEL_VAR, ""), (JSON_INDENT_VAR, "  ")])]
    fn unset_or_blank_variables_fall_back_to_defaults(#[case] pairs: &[(&str, &str)]) {
        let config = CliConfig::from_lookup(lookup_from(pairs)).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[rstest]
    #[case("-1")]
    #[case("two")]
    #[case("17")]
    fn rejects_invalid_indent(#[case] value: &str) {
        let result = CliConfig::from_lookup(lookup_from(&[(JSON_INDENT_VAR, value)]));
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_invalid_log_level_variable() {
        let result = CliConfig::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, "loud")]));
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn apply_overrides_updates_selected_fields() {
        let config = CliConfig::default()
            .apply_overrides(Some(LevelFilter::ERROR), Some(0))
            .unwrap();
        assert_eq!(config.log_level, LevelFilter::ERROR);
        assert_eq!(config.json_indent, 0);

        let config = CliConfig::default().apply_overrides(None, None).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn apply_overrides_rejects_oversized_indent() {
        let result = CliConfig::default().apply_overrides(None, Some(40));
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }
}
