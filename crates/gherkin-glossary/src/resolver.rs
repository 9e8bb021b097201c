//! Conjunction resolution.
//!
//! `And`, `But`, and `*` carry no meaning of their own: each stands for the
//! nearest preceding `Given` or `Then`. Resolution runs in two passes. The
//! first pass classifies every statement and finds each conjunction's target
//! without touching the text; the second rewrites the leading token. Because
//! conjunction lines never count as targets, the outcome does not depend on
//! the order in which rewrites are applied.

use tracing::trace;

use crate::errors::GlossaryError;
use crate::keyword::Keyword;

/// Rewrite conjunction-led statements to use the keyword they stand for.
///
/// The returned sequence has the same length and order as `statements`.
/// Statements that do not lead with a conjunction are returned unchanged;
/// for conjunction-led statements only the leading token is replaced.
///
/// # Errors
///
/// Returns [`GlossaryError::MalformedPrecedence`] when scanning back from a
/// conjunction reaches a terminal keyword (`Feature`, `Rule`, `Background`,
/// `Scenario`, `Scenario Outline`, or `When`) before a `Given` or `Then`, and
/// [`GlossaryError::UnresolvableConjunction`] when the scan runs past the
/// first statement. The first failing statement in input order is reported.
///
/// # Examples
///
/// ```
/// use gherkin_glossary::resolve_conjunctions;
///
/// let resolved = resolve_conjunctions(&["Given I have 3 dogs", "And I have 5 cats"])?;
/// assert_eq!(resolved, vec!["Given I have 3 dogs", "Given I have 5 cats"]);
/// # Ok::<(), gherkin_glossary::GlossaryError>(())
/// ```
pub fn resolve_conjunctions<S: AsRef<str>>(
    statements: &[S],
) -> Result<Vec<String>, GlossaryError> {
    let leading: Vec<Option<Keyword>> = statements
        .iter()
        .map(|s| Keyword::leading(s.as_ref()))
        .collect();

    let targets = find_targets(statements, &leading)?;

    Ok(statements
        .iter()
        .zip(leading)
        .zip(targets)
        .map(|((statement, keyword), target)| {
            let text = statement.as_ref();
            match (keyword, target) {
                (Some(conjunction), Some(target)) => substitute(text, conjunction, target),
                _ => text.to_string(),
            }
        })
        .collect())
}

/// First pass: compute the target keyword for every conjunction, read-only.
fn find_targets<S: AsRef<str>>(
    statements: &[S],
    leading: &[Option<Keyword>],
) -> Result<Vec<Option<Keyword>>, GlossaryError> {
    leading
        .iter()
        .enumerate()
        .map(|(index, keyword)| match keyword {
            Some(conjunction) if conjunction.is_conjunction() => {
                lookbehind(statements, leading, index, *conjunction).map(Some)
            }
            _ => Ok(None),
        })
        .collect()
}

fn lookbehind<S: AsRef<str>>(
    statements: &[S],
    leading: &[Option<Keyword>],
    index: usize,
    conjunction: Keyword,
) -> Result<Keyword, GlossaryError> {
    let statement = || {
        statements
            .get(index)
            .map_or_else(String::new, |s| s.as_ref().to_string())
    };

    let preceding = leading.get(..index).unwrap_or_default();
    for (offset, keyword) in preceding.iter().enumerate().rev() {
        match keyword {
            Some(target) if target.is_aliasable() => {
                trace!(index, from = %conjunction, to = %target, "resolved conjunction");
                return Ok(*target);
            }
            Some(terminal) if terminal.is_terminal() => {
                return Err(GlossaryError::MalformedPrecedence {
                    index,
                    statement: statement(),
                    conjunction,
                    preceding: statements
                        .get(offset)
                        .map_or_else(String::new, |s| s.as_ref().to_string()),
                });
            }
            _ => {}
        }
    }

    Err(GlossaryError::UnresolvableConjunction {
        index,
        statement: statement(),
    })
}

/// Second pass: swap the leading conjunction for its target keyword.
fn substitute(statement: &str, conjunction: Keyword, target: Keyword) -> String {
    statement.strip_prefix(conjunction.as_str()).map_or_else(
        || statement.to_string(),
        |rest| format!("{}{rest}", target.as_str()),
    )
}
