//! Step vocabulary extraction for Gherkin feature files.
//!
//! The crate turns the trimmed lines of one or more `.feature` files into a
//! [`Glossary`]: the deduplicated `Given`/`When`/`Then` phrases, tags, and
//! comments they contain. Two steps run in sequence:
//!
//! - [`resolve_conjunctions`] rewrites `And`, `But`, and `*` steps to the
//!   `Given` or `Then` they continue.
//! - [`normalise_statement`] replaces integers, quoted strings, table
//!   references, and [`CustomType`] values with placeholders so that steps
//!   differing only in literals collapse into one entry.
//!
//! Construction performs no I/O and holds no shared state, so independent
//! glossaries may be built concurrently.

mod errors;
mod glossary;
mod keyword;
mod normalise;
mod resolver;

pub use errors::GlossaryError;
pub use glossary::Glossary;
pub use keyword::Keyword;
pub use normalise::{CustomType, DATA_TABLE, INT, STRING, normalise_statement};
pub use resolver::resolve_conjunctions;
