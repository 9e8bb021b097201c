//! Error types raised while building a glossary.

use thiserror::Error;

use crate::keyword::Keyword;

/// Errors surfaced while resolving conjunctions.
///
/// Both variants abort glossary construction. The `index` fields are
/// zero-based positions in the statement sequence passed to the resolver.
///
/// # Examples
/// ```
/// use gherkin_glossary::{GlossaryError, resolve_conjunctions};
///
/// let err = resolve_conjunctions(&["* a step"]).unwrap_err();
/// assert!(matches!(err, GlossaryError::UnresolvableConjunction { index: 0, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlossaryError {
    /// A conjunction is governed by a structural keyword or by `When`.
    #[error(
        "malformed gherkin at statement {index}: '{conjunction}' in '{statement}' should be \
         preceded by Given or Then, but is preceded by '{preceding}'"
    )]
    MalformedPrecedence {
        /// Position of the offending statement.
        index: usize,
        /// The offending statement text.
        statement: String,
        /// The conjunction leading the offending statement.
        conjunction: Keyword,
        /// The disqualifying preceding statement text.
        preceding: String,
    },
    /// No aliasable or terminal statement precedes the conjunction.
    #[error("no valid preceding statement found for '{statement}' at statement {index}")]
    UnresolvableConjunction {
        /// Position of the offending statement.
        index: usize,
        /// The offending statement text.
        statement: String,
    },
}
