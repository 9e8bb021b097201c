//! Gherkin keyword taxonomy.
//!
//! This module provides the closed [`Keyword`] enum together with the three
//! role predicates used during conjunction resolution. Every keyword belongs
//! to at most one of the roles:
//!
//! - *conjunction*: `And`, `But`, `*`
//! - *aliasable*: `Given`, `Then`
//! - *terminal*: `Feature`, `Rule`, `Background`, `Scenario`,
//!   `Scenario Outline`, `When`

use std::fmt;

/// Section or step keyword that may lead a Gherkin statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// Top-level feature heading.
    Feature,
    /// Groups scenarios under a business rule.
    Rule,
    /// Steps shared by every scenario of a feature or rule.
    Background,
    /// A single concrete scenario.
    Scenario,
    /// A scenario template expanded from an examples table.
    ScenarioOutline,
    /// Setup preconditions for a scenario.
    Given,
    /// Perform an action when testing behaviour.
    When,
    /// Assert the expected outcome of a scenario.
    Then,
    /// Additional conditions that share context with the previous step.
    And,
    /// Negative or contrasting conditions.
    But,
    /// Bullet-style continuation step.
    Asterisk,
}

impl Keyword {
    /// Every keyword, ordered so that longer keywords sharing a prefix with a
    /// shorter one are tried first.
    pub const ALL: [Self; 11] = [
        Self::Feature,
        Self::Rule,
        Self::Background,
        Self::ScenarioOutline,
        Self::Scenario,
        Self::Given,
        Self::When,
        Self::Then,
        Self::And,
        Self::But,
        Self::Asterisk,
    ];

    /// Return the keyword as it appears in feature source.
    ///
    /// # Examples
    ///
    /// ```
    /// use gherkin_glossary::Keyword;
    ///
    /// assert_eq!(Keyword::ScenarioOutline.as_str(), "Scenario Outline");
    /// assert_eq!(Keyword::Asterisk.as_str(), "*");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "Feature",
            Self::Rule => "Rule",
            Self::Background => "Background",
            Self::Scenario => "Scenario",
            Self::ScenarioOutline => "Scenario Outline",
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
            Self::Asterisk => "*",
        }
    }

    /// `And`, `But`, and `*` stand in for the nearest preceding aliasable
    /// keyword and are never a phrase's own keyword.
    #[must_use]
    pub const fn is_conjunction(self) -> bool {
        matches!(self, Self::And | Self::But | Self::Asterisk)
    }

    /// Keywords a conjunction may resolve to.
    #[must_use]
    pub const fn is_aliasable(self) -> bool {
        matches!(self, Self::Given | Self::Then)
    }

    /// Keywords that invalidate a conjunction when reached first while
    /// scanning backwards.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Feature
                | Self::Rule
                | Self::Background
                | Self::Scenario
                | Self::ScenarioOutline
                | Self::When
        )
    }

    /// Return the keyword leading `statement`, if any.
    ///
    /// A keyword leads a statement when the statement begins with the keyword
    /// text followed by whitespace, a colon, or the end of the line. Matching
    /// is case-sensitive, as it is in feature files.
    ///
    /// # Examples
    ///
    /// ```
    /// use gherkin_glossary::Keyword;
    ///
    /// assert_eq!(Keyword::leading("Given a step"), Some(Keyword::Given));
    /// assert_eq!(
    ///     Keyword::leading("Scenario Outline: eating"),
    ///     Some(Keyword::ScenarioOutline)
    /// );
    /// assert_eq!(Keyword::leading("Andrew arrives"), None);
    /// assert_eq!(Keyword::leading("# Given a comment"), None);
    /// ```
    #[must_use]
    pub fn leading(statement: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| keyword.leads(statement))
    }

    fn leads(self, statement: &str) -> bool {
        let Some(rest) = statement.strip_prefix(self.as_str()) else {
            return false;
        };
        matches!(rest.chars().next(), None | Some(':')) || rest.starts_with(char::is_whitespace)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn role_sets_are_disjoint() {
        for keyword in Keyword::ALL {
            let roles = [
                keyword.is_conjunction(),
                keyword.is_aliasable(),
                keyword.is_terminal(),
            ];
            assert!(
                roles.iter().filter(|&&r| r).count() <= 1,
                "{keyword} belongs to more than one role"
            );
        }
    }

    #[rstest]
    #[case(Keyword::And)]
    #[case(Keyword::But)]
    #[case(Keyword::Asterisk)]
    fn conjunctions_are_neither_aliasable_nor_terminal(#[case] keyword: Keyword) {
        assert!(keyword.is_conjunction());
        assert!(!keyword.is_aliasable());
        assert!(!keyword.is_terminal());
    }

    #[test]
    fn when_is_terminal_not_aliasable() {
        assert!(Keyword::When.is_terminal());
        assert!(!Keyword::When.is_aliasable());
        assert!(Keyword::Given.is_aliasable());
        assert!(Keyword::Then.is_aliasable());
    }

    #[rstest]
    #[case("Feature: Eating", Some(Keyword::Feature))]
    #[case("Rule: only one", Some(Keyword::Rule))]
    #[case("Background:", Some(Keyword::Background))]
    #[case("Scenario: a", Some(Keyword::Scenario))]
    #[case("Scenario Outline: b", Some(Keyword::ScenarioOutline))]
    #[case("Given x", Some(Keyword::Given))]
    #[case("When y", Some(Keyword::When))]
    #[case("Then z", Some(Keyword::Then))]
    #[case("And more", Some(Keyword::And))]
    #[case("But less", Some(Keyword::But))]
    #[case("* bullet", Some(Keyword::Asterisk))]
    #[case("And", Some(Keyword::And))]
    #[case("Givenchy is a brand", None)]
    #[case("*bold*", None)]
    #[case("given lowercase", None)]
    #[case("then lowercase", None)]
    #[case("SCENARIO: shouting", None)]
    #[case("Examples:", None)]
    #[case("| a | b |", None)]
    #[case("@tag", None)]
    #[case("", None)]
    fn detects_leading_keyword(#[case] statement: &str, #[case] expected: Option<Keyword>) {
        assert_eq!(Keyword::leading(statement), expected);
    }

    #[test]
    fn display_matches_source_text() {
        assert_eq!(Keyword::ScenarioOutline.to_string(), "Scenario Outline");
        assert_eq!(Keyword::Asterisk.to_string(), "*");
    }
}
