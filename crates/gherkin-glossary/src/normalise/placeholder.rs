//! Literal-to-placeholder rewrites for step text.

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder substituted for quoted data-table references.
pub const DATA_TABLE: &str = "<data table>";
/// Placeholder substituted for standalone integers.
pub const INT: &str = "{int}";
/// Placeholder substituted for quoted strings.
pub const STRING: &str = "{string}";

static DATA_TABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""<[a-zA-Z\s0-9]+>""#).unwrap_or_else(|_| unreachable!()));
static INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s[0-9]+\s").unwrap_or_else(|_| unreachable!()));
static STRING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[a-zA-Z\s0-9]+""#).unwrap_or_else(|_| unreachable!()));
static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").unwrap_or_else(|_| unreachable!()));

/// Pad `placeholder` with a space on either side.
pub(crate) fn padded(placeholder: &str) -> String {
    format!(" {placeholder} ")
}

/// Replace quoted tables, integers, and quoted strings, in that order, then
/// tidy whitespace.
///
/// The bounding whitespace of an integer is consumed by the match, so in
/// `"add 1 2 items"` only `1` is replaced.
pub(crate) fn replace_literals(statement: &str) -> String {
    let tables = DATA_TABLE_RE.replace_all(statement, padded(DATA_TABLE).as_str());
    let ints = INT_RE.replace_all(&tables, padded(INT).as_str());
    let strings = STRING_RE.replace_all(&ints, padded(STRING).as_str());
    collapse_whitespace(&strings)
}

/// Collapse runs of whitespace into a single space and strip trailing
/// whitespace.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN_RE
        .replace_all(text, " ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Given I add 42 items", "Given I add {int} items")]
    #[case("Given I see \"hello world\"", "Given I see {string}")]
    #[case("Given I use \"<table1>\"", "Given I use <data table>")]
    #[case("Given I use \"<row one>\" twice", "Given I use <data table> twice")]
    #[case("Given 7 is odd", "Given {int} is odd")]
    #[case("Given I add 1 2 items", "Given I add {int} 2 items")]
    #[case("Given version 1.5 ships", "Given version 1.5 ships")]
    #[case("Given I pay 42", "Given I pay 42")]
    #[case("Given item-42 exists", "Given item-42 exists")]
    #[case("Given \"a-b\" is quoted", "Given \"a-b\" is quoted")]
    #[case("Given   spaced    out   ", "Given spaced out")]
    fn replaces_literals(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(replace_literals(input), expected);
    }

    #[test]
    fn table_reference_takes_precedence_over_string() {
        assert_eq!(
            replace_literals("Then \"<name>\" and \"name\" match"),
            "Then <data table> and {string} match"
        );
    }

    #[test]
    fn integers_inside_quotes_become_strings() {
        assert_eq!(
            replace_literals("When I type \"12\" now"),
            "When I type {string} now"
        );
    }

    #[test]
    fn collapses_tabs_and_newlines() {
        assert_eq!(collapse_whitespace("a\t\tb \n c\t"), "a b c");
    }

    #[test]
    fn keeps_single_inner_whitespace() {
        assert_eq!(collapse_whitespace("a\tb"), "a\tb");
    }
}
