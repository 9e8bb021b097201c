//! Integration tests that build glossaries from whole feature files.
#![expect(clippy::expect_used, reason = "tests assert successful construction")]

use std::collections::BTreeSet;

use gherkin_glossary::{CustomType, Glossary, GlossaryError, Keyword, resolve_conjunctions};

const ORDERS: &str = "\
@orders
Feature: Ordering

  Rule: stock is reserved

    Background:
      Given a warehouse with 12 crates

    Scenario: single order
      Given a customer \"Grace\" with a red basket
      And a basket with 3 items
      When the customer checks out
      Then the order total is 30 pounds
      And the basket is empty

    @slow #@flaky
    Scenario Outline: repeated orders
      Given a basket with 7 items
      * a customer \"Linus\" with a blue basket
      When the customer orders \"<count>\" times
      Then \"<count>\" receipts exist
      But no crate is reserved twice

      Examples:
        | count |
        | 2     |

  # pending catalogue integration
";

fn lines(source: &str) -> Vec<String> {
    source.lines().map(|line| line.trim().to_string()).collect()
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn builds_glossary_from_feature_text() {
    let statements = lines(ORDERS);
    let types = [CustomType::new("color", ["red", "blue"])];
    let glossary = Glossary::new(&statements, &types).expect("feature should build");

    assert_eq!(
        glossary.given(),
        &set(&[
            "Given a basket with {int} items",
            "Given a customer {string} with a {color} basket",
            "Given a warehouse with {int} crates",
        ])
    );
    assert_eq!(
        glossary.when(),
        &set(&[
            "When the customer checks out",
            "When the customer orders <data table> times",
        ])
    );
    assert_eq!(
        glossary.then(),
        &set(&[
            "Then <data table> receipts exist",
            "Then no crate is reserved twice",
            "Then the basket is empty",
            "Then the order total is {int} pounds",
        ])
    );
    assert_eq!(glossary.tags(), &set(&["@orders", "@slow"]));
    assert_eq!(
        glossary.comments(),
        &set(&["# pending catalogue integration"])
    );
}

#[test]
fn concatenated_files_build_one_glossary() {
    let first = "Feature: a\nScenario: one\nGiven I have 3 dogs\nAnd I have 5 dogs";
    let second = "Feature: b\nScenario: two\nGiven I have 9 dogs\nThen I pat them";
    let mut statements = lines(first);
    statements.extend(lines(second));
    let glossary = Glossary::new(&statements, &[]).expect("files should build");
    assert_eq!(glossary.given(), &set(&["Given I have {int} dogs"]));
    assert_eq!(glossary.then(), &set(&["Then I pat them"]));
}

#[test]
fn conjunction_after_when_aborts_construction() {
    let statements = lines("Scenario: s\nWhen something happens\nBut \"<foo>\" is set");
    let err = Glossary::new(&statements, &[]).expect_err("malformed precedence");
    assert_eq!(
        err,
        GlossaryError::MalformedPrecedence {
            index: 2,
            statement: "But \"<foo>\" is set".into(),
            conjunction: Keyword::But,
            preceding: "When something happens".into(),
        }
    );
    assert!(err.to_string().contains("When something happens"));
}

#[test]
fn resolver_leaves_caller_statements_untouched() {
    let statements = vec!["Given a".to_string(), "And b".to_string()];
    let resolved = resolve_conjunctions(&statements).expect("should resolve");
    assert_eq!(statements, vec!["Given a", "And b"]);
    assert_eq!(resolved, vec!["Given a", "Given b"]);
}

#[test]
fn serialised_glossary_has_exactly_five_sorted_arrays() {
    let statements = lines("@t\n# c\nGiven a 1 b\nThen z\nThen a");
    let glossary = Glossary::new(&statements, &[]).expect("statements should build");
    let value = serde_json::to_value(&glossary).expect("glossary should serialise");

    let keys: Vec<&str> = value
        .as_object()
        .map(|object| object.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(keys.len(), 5);
    for key in ["given", "when", "then", "tags", "comments"] {
        assert!(keys.contains(&key), "missing key {key}");
    }
    assert_eq!(
        value.get("then"),
        Some(&serde_json::json!(["Then a", "Then z"]))
    );
}
