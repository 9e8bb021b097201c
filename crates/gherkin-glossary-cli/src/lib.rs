//! Command line front end for `gherkin-glossary`.
//!
//! This crate gathers feature file lines from disk, hands them to
//! [`gherkin_glossary::Glossary`], and writes the result as JSON.
//!
//! # Overview
//!
//! - Recursive discovery of feature files, with an optional JSON snapshot
//!   that later runs can load instead of walking the tree again
//! - Custom placeholder types loaded from a JSON file and checked against a
//!   JSON Schema
//! - Structured logging to stderr
//!
//! # Configuration
//!
//! The tool can be configured via environment variables:
//!
//! - `GHERKIN_GLOSSARY_LOG_LEVEL`: Log verbosity (off, error, warn, info,
//!   debug, trace)
//! - `GHERKIN_GLOSSARY_JSON_INDENT`: Spaces per indent level in JSON output
//!
//! Command line flags take precedence over the environment.
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use gherkin_glossary_cli::cli::{Args, run};
//!
//! let args = Args::parse();
//! let config = args.config()?;
//! let glossary = run(&args, &config)?;
//! ```

pub mod cli;
pub mod config;
pub mod custom_types;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
