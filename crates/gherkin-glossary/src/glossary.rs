//! Glossary assembly.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::errors::GlossaryError;
use crate::keyword::Keyword;
use crate::normalise::{CustomType, normalise_statement};
use crate::resolver::resolve_conjunctions;

/// Deduplicated vocabulary of a set of feature files.
///
/// Every field is computed when the glossary is built and never changes
/// afterwards. The sets are ordered so serialised output is stable between
/// runs, but consumers should treat them as unordered.
///
/// Serialises to an object with exactly the keys `given`, `when`, `then`,
/// `tags`, and `comments`, each an array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Glossary {
    given: BTreeSet<String>,
    when: BTreeSet<String>,
    then: BTreeSet<String>,
    tags: BTreeSet<String>,
    comments: BTreeSet<String>,
}

impl Glossary {
    /// Build a glossary from trimmed feature lines.
    ///
    /// Conjunctions are resolved first; the resolved statements are then
    /// partitioned by leading keyword and normalised with `custom_types`
    /// (pass an empty slice when there are none).
    ///
    /// # Errors
    ///
    /// Returns a [`GlossaryError`] when any conjunction cannot be resolved.
    /// No partial glossary is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use gherkin_glossary::Glossary;
    ///
    /// let glossary = Glossary::new(
    ///     &["@smoke", "Given I have 3 dogs", "And I have 5 dogs"],
    ///     &[],
    /// )?;
    /// assert_eq!(glossary.given().len(), 1);
    /// assert!(glossary.given().contains("Given I have {int} dogs"));
    /// assert!(glossary.tags().contains("@smoke"));
    /// # Ok::<(), gherkin_glossary::GlossaryError>(())
    /// ```
    pub fn new<S: AsRef<str>>(
        statements: &[S],
        custom_types: &[CustomType],
    ) -> Result<Self, GlossaryError> {
        let resolved = resolve_conjunctions(statements)?;

        let glossary = Self {
            given: terms(&resolved, Keyword::Given, custom_types),
            when: terms(&resolved, Keyword::When, custom_types),
            then: terms(&resolved, Keyword::Then, custom_types),
            tags: tags(&resolved),
            comments: comments(&resolved),
        };

        debug!(
            statements = resolved.len(),
            given = glossary.given.len(),
            when = glossary.when.len(),
            then = glossary.then.len(),
            tags = glossary.tags.len(),
            comments = glossary.comments.len(),
            "built glossary"
        );
        Ok(glossary)
    }

    /// Normalised `Given` phrases.
    #[must_use]
    pub fn given(&self) -> &BTreeSet<String> {
        &self.given
    }

    /// Normalised `When` phrases.
    #[must_use]
    pub fn when(&self) -> &BTreeSet<String> {
        &self.when
    }

    /// Normalised `Then` phrases.
    #[must_use]
    pub fn then(&self) -> &BTreeSet<String> {
        &self.then
    }

    /// Tags found anywhere in the input, excluding commented-out tags.
    #[must_use]
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Comment lines, verbatim.
    #[must_use]
    pub fn comments(&self) -> &BTreeSet<String> {
        &self.comments
    }

    /// Total number of entries across all five collections.
    #[must_use]
    pub fn len(&self) -> usize {
        [
            &self.given,
            &self.when,
            &self.then,
            &self.tags,
            &self.comments,
        ]
        .iter()
        .map(|set| set.len())
        .sum()
    }

    /// Whether every collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn terms(resolved: &[String], keyword: Keyword, custom_types: &[CustomType]) -> BTreeSet<String> {
    resolved
        .iter()
        .filter(|statement| Keyword::leading(statement) == Some(keyword))
        .map(|statement| normalise_statement(statement, custom_types))
        .collect()
}

fn tags(resolved: &[String]) -> BTreeSet<String> {
    resolved
        .iter()
        .flat_map(|statement| statement.split_whitespace())
        .filter(|token| token.starts_with('@') && !token.contains('#'))
        .map(str::to_string)
        .collect()
}

fn comments(resolved: &[String]) -> BTreeSet<String> {
    resolved
        .iter()
        .filter(|statement| statement.starts_with('#'))
        .cloned()
        .collect()
}
