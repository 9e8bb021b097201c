//! Glossary binary for Gherkin feature files.
//!
//! Walks a feature tree (or loads a snapshot of one), builds the step
//! glossary, and writes it as JSON. Exits with status 2 on invalid
//! configuration and 1 when the run fails.

use std::process::ExitCode;

use clap::Parser;
use eyre::{Result, WrapErr};
use tracing::{error, info};

use gherkin_glossary_cli::cli::{Args, run};
use gherkin_glossary_cli::config::CliConfig;
use gherkin_glossary_cli::logging::init_logging;

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "starting gherkin-glossary"
    );

    if let Err(report) = build(&args, &config) {
        error!("{report:?}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn build(args: &Args, config: &CliConfig) -> Result<()> {
    let glossary = run(args, config).wrap_err_with(|| {
        format!(
            "failed to build glossary {}",
            args.gherkin_glossary_output.display()
        )
    })?;
    info!(entries = glossary.len(), "done");
    Ok(())
}
