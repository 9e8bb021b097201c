//! Command line arguments and the glossary pipeline they drive.

use std::path::PathBuf;

use clap::Parser;
use gherkin_glossary::Glossary;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use crate::config::{CliConfig, parse_log_level};
use crate::custom_types::{DEFAULT_SCHEMA, load_custom_types};
use crate::discovery::{DEFAULT_EXTENSION, FolderFiles};
use crate::error::CliError;
use crate::output::write_glossary;

/// Build a deduplicated glossary of Gherkin steps, tags, and comments.
#[derive(Parser, Debug)]
#[command(name = "gherkin-glossary", version, about)]
pub struct Args {
    /// Where the feature lines come from.
    #[command(flatten)]
    pub source: Source,

    /// File extensions to include, space separated.
    #[arg(short, long, num_args = 1.., default_value = DEFAULT_EXTENSION)]
    pub extensions: Vec<String>,

    /// Write the discovered folder files snapshot to this path. Only valid
    /// with `--starting-directory`.
    #[arg(short = 'o', long)]
    pub folder_files_output: Option<PathBuf>,

    /// Path of the glossary JSON to write.
    #[arg(short = 'g', long)]
    pub gherkin_glossary_output: PathBuf,

    /// JSON file of custom types used for placeholder substitution.
    #[arg(short = 't', long)]
    pub custom_gherkin_types: Option<PathBuf>,

    /// JSON Schema the custom types file must satisfy.
    #[arg(short = 's', long, default_value = DEFAULT_SCHEMA)]
    pub schema: PathBuf,

    /// Spaces per indent level in JSON output.
    #[arg(long)]
    pub indent: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, value_parser = parse_log_level)]
    pub log_level: Option<LevelFilter>,
}

/// Mutually exclusive input sources; exactly one is required.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Source {
    /// Directory to search recursively for feature files.
    #[arg(short = 'd', long)]
    pub starting_directory: Option<PathBuf>,

    /// Folder files snapshot written by an earlier run.
    #[arg(short = 'i', long)]
    pub input_folder_files: Option<PathBuf>,
}

impl Args {
    /// Merge environment configuration with command line overrides.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if the flags are inconsistent or an
    /// environment variable or override is invalid.
    pub fn config(&self) -> Result<CliConfig, CliError> {
        self.validate()?;
        CliConfig::from_env()?.apply_overrides(self.log_level, self.indent)
    }

    /// Reject flag combinations that parse but cannot be honoured.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` when `--folder-files-output` is
    /// given without `--starting-directory`.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.folder_files_output.is_some() && self.source.starting_directory.is_none() {
            return Err(CliError::InvalidConfig(
                "--folder-files-output requires --starting-directory".into(),
            ));
        }
        Ok(())
    }
}

/// Gather feature lines, build the glossary, and write it out.
///
/// # Errors
///
/// Returns the first [`CliError`] raised while reading inputs, building the
/// glossary, or writing outputs. Nothing is written to the glossary path when
/// construction fails.
pub fn run(args: &Args, config: &CliConfig) -> Result<Glossary, CliError> {
    args.validate()?;

    let source = &args.source;
    let folder_files = match (&source.starting_directory, &source.input_folder_files) {
        (Some(directory), _) => {
            let tree = FolderFiles::populate(directory, &args.extensions)?;
            if let Some(output) = &args.folder_files_output {
                tree.dump(output, config.json_indent)?;
            }
            tree
        }
        (None, Some(input)) => FolderFiles::load(input)?,
        (None, None) => {
            return Err(CliError::InvalidConfig(
                "one of --starting-directory or --input-folder-files is required".into(),
            ));
        }
    };

    let custom_types = args
        .custom_gherkin_types
        .as_deref()
        .map(|path| load_custom_types(path, &args.schema))
        .transpose()?
        .unwrap_or_default();

    let statements = folder_files.content();
    info!(statements = statements.len(), "building glossary");
    let glossary = Glossary::new(&statements, &custom_types)?;
    write_glossary(&glossary, &args.gherkin_glossary_output, config.json_indent)?;
    Ok(glossary)
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        let argv = std::iter::once("gherkin-glossary").chain(args.iter().copied());
        Args::try_parse_from(argv)
    }

    #[test]
    fn parses_directory_run_with_defaults() {
        let args = parse(&["-d", "features", "-g", "glossary.json"]).expect("args should parse");
        assert_eq!(
            args.source.starting_directory,
            Some(PathBuf::from("features"))
        );
        assert_eq!(args.extensions, [DEFAULT_EXTENSION]);
        assert_eq!(args.gherkin_glossary_output, Path::new("glossary.json"));
        assert!(args.custom_gherkin_types.is_none());
        assert_eq!(args.schema, PathBuf::from(DEFAULT_SCHEMA));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn parses_multiple_extensions_and_overrides() {
        let args = parse(&[
            "--starting-directory",
            "specs",
            "-e",
            ".feature",
            ".story",
            "-g",
            "out.json",
            "-t",
            "types.json",
            "-s",
            "types.schema.json",
            "--indent",
            "4",
            "--log-level",
            "debug",
        ])
        .expect("args should parse");
        assert_eq!(args.extensions, [".feature", ".story"]);
        assert_eq!(args.indent, Some(4));
        assert_eq!(args.log_level, Some(LevelFilter::DEBUG));
        assert_eq!(args.custom_gherkin_types, Some(PathBuf::from("types.json")));
        assert_eq!(args.schema, PathBuf::from("types.schema.json"));
    }

    #[rstest]
    #[case(&["-g", "out.json"])]
    #[case(&["-d", "a", "-i", "b.json", "-g", "out.json"])]
    #[case(&["-d", "a"])]
    #[case(&["-d", "a", "-g", "out.json", "--log-level", "loud"])]
    fn rejects_invalid_combinations(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn snapshot_output_requires_a_directory_source() {
        let args = parse(&["-i", "b.json", "-o", "cache.json", "-g", "out.json"])
            .expect("args should parse");
        let err = args.validate().expect_err("-o without -d should be rejected");
        assert!(matches!(err, CliError::InvalidConfig(_)));
        assert!(err.to_string().contains("--folder-files-output"));

        let config = CliConfig::default();
        let err = run(&args, &config).expect_err("run should refuse the combination");
        assert!(matches!(err, CliError::InvalidConfig(_)));
    }

    #[test]
    fn accepts_snapshot_input() {
        let args = parse(&["-i", "cache.json", "-g", "out.json"]).expect("args should parse");
        assert_eq!(
            args.source.input_folder_files,
            Some(PathBuf::from("cache.json"))
        );
        assert!(args.source.starting_directory.is_none());
    }
}
