//! Error types for the glossary command line tool.
//!
//! Every variant that touches the filesystem carries the offending path so the
//! final report tells the user which file to look at.

use std::fmt::Display;
use std::path::PathBuf;

use gherkin_glossary::GlossaryError;
use thiserror::Error;

/// Errors that can occur while producing a glossary from disk.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing a file or directory failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Walking a directory tree failed.
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        /// Directory being walked.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: walkdir::Error,
    },

    /// A JSON document could not be read or written.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        /// Path of the JSON document.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The schema document is not a usable JSON Schema.
    #[error("invalid JSON schema {}: {reason}", path.display())]
    InvalidSchema {
        /// Path of the schema document.
        path: PathBuf,
        /// Why the schema could not be compiled.
        reason: String,
    },

    /// A document does not satisfy its JSON Schema.
    #[error("{} does not match its schema: {reason}", path.display())]
    SchemaViolation {
        /// Path of the offending document.
        path: PathBuf,
        /// First violation reported by the validator.
        reason: String,
    },

    /// A custom type entry failed validation.
    #[error("invalid custom type at index {index}: {reason}")]
    InvalidCustomType {
        /// Zero-based position of the entry in the custom types array.
        index: usize,
        /// Why the entry was rejected.
        reason: String,
    },

    /// The feature lines could not be turned into a glossary.
    #[error(transparent)]
    Glossary(#[from] GlossaryError),
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_schema(path: impl Into<PathBuf>, reason: impl Display) -> Self {
        Self::InvalidSchema {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn schema_violation(path: impl Into<PathBuf>, reason: impl Display) -> Self {
        Self::SchemaViolation {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
