//! Structured logging to stderr.
//!
//! The configured level applies to the glossary crates. Anything else that
//! logs through `tracing` is held at `warn` or quieter, so a `trace` run
//! shows conjunction resolution rather than dependency internals.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::CliConfig;

/// Target prefix shared by the library, this crate, and the binary.
const GLOSSARY_TARGET: &str = "gherkin_glossary";

fn filter_for(level: LevelFilter) -> EnvFilter {
    let others = level.min(LevelFilter::WARN);
    EnvFilter::new(format!("{others},{GLOSSARY_TARGET}={level}"))
}

/// Install the global subscriber for `config.log_level`.
///
/// Only the first call in a process takes effect; later calls are ignored.
pub fn init_logging(config: &CliConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_for(config.log_level))
        .with_writer(std::io::stderr)
        .with_target(config.log_level >= LevelFilter::DEBUG)
        .without_time()
        .finish();

    // First subscriber wins.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
