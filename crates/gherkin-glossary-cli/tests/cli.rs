//! End-to-end tests for the `gherkin-glossary` binary.
#![expect(clippy::expect_used, reason = "tests require descriptive failures")]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create parent dir");
    }
    fs::write(path, content).expect("failed to write file");
}

fn glossary_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gherkin-glossary").expect("binary exists");
    cmd.env_remove("GHERKIN_GLOSSARY_LOG_LEVEL")
        .env_remove("GHERKIN_GLOSSARY_JSON_INDENT")
        .env("NO_COLOR", "1");
    cmd
}

fn shipped_schema() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../schema.json")
}

fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("output should exist");
    serde_json::from_str(&text).expect("output should be JSON")
}

#[fixture]
fn workspace() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    write(
        dir.path(),
        "features/cart.feature",
        "@cart\nFeature: Cart\n\n  Scenario: add\n    Given a red cart with 2 items\n    And a coupon \"SAVE10\"\n    When I add 1 item\n    Then the cart has 3 items\n    * the total is shown\n",
    );
    write(
        dir.path(),
        "features/nested/checkout.feature",
        "# checkout flows\nFeature: Checkout\n\n  Scenario: pay\n    Given a blue cart with 5 items\n    When I pay\n    Then the cart has 0 items\n",
    );
    write(dir.path(), "features/readme.md", "Given nothing\n");
    dir
}

#[rstest]
fn writes_glossary_for_a_directory(workspace: TempDir) {
    let output = workspace.path().join("glossary.json");
    glossary_cmd()
        .arg("-d")
        .arg(workspace.path().join("features"))
        .arg("-g")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        read_json(&output),
        json!({
            "given": [
                "Given a blue cart with {int} items",
                "Given a coupon {string}",
                "Given a red cart with {int} items"
            ],
            "when": ["When I add {int} item", "When I pay"],
            "then": ["Then the cart has {int} items", "Then the total is shown"],
            "tags": ["@cart"],
            "comments": ["# checkout flows"]
        })
    );
}

#[rstest]
fn snapshot_can_replace_the_directory_walk(workspace: TempDir) {
    let snapshot = workspace.path().join("folder_files.json");
    let first = workspace.path().join("first.json");
    glossary_cmd()
        .arg("-d")
        .arg(workspace.path().join("features"))
        .arg("-o")
        .arg(&snapshot)
        .arg("-g")
        .arg(&first)
        .assert()
        .success();

    let types = workspace.path().join("types.json");
    write(
        workspace.path(),
        "types.json",
        r#"[{"custom_type": "color", "valid_values": ["red", "blue"]}]"#,
    );
    let second = workspace.path().join("second.json");
    glossary_cmd()
        .arg("-i")
        .arg(&snapshot)
        .arg("-t")
        .arg(&types)
        .arg("-s")
        .arg(shipped_schema())
        .arg("-g")
        .arg(&second)
        .arg("--indent")
        .arg("4")
        .assert()
        .success();

    let glossary = read_json(&second);
    assert_eq!(
        glossary.get("given"),
        Some(&json!([
            "Given a coupon {string}",
            "Given a {color} cart with {int} items"
        ]))
    );
    assert_eq!(glossary.get("then"), read_json(&first).get("then"));
    let text = fs::read_to_string(&second).expect("output should exist");
    assert!(text.starts_with("{\n    \"given\""));
}

#[rstest]
fn malformed_feature_fails_without_output(workspace: TempDir) {
    write(
        workspace.path(),
        "features/broken.feature",
        "Feature: Broken\n  Scenario: s\n    When it runs\n    And it breaks\n",
    );
    let output = workspace.path().join("glossary.json");
    let assert = glossary_cmd()
        .arg("-d")
        .arg(workspace.path().join("features"))
        .arg("-g")
        .arg(&output)
        .assert()
        .code(1);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("malformed gherkin"), "stderr: {stderr}");
    assert!(stderr.contains("When it runs"), "stderr: {stderr}");
    assert!(!output.exists());
}

#[rstest]
fn custom_types_breaking_the_schema_fail(workspace: TempDir) {
    write(
        workspace.path(),
        "types.json",
        r#"[{"custom_type": "color", "values": ["red"]}]"#,
    );
    let output = workspace.path().join("glossary.json");
    let assert = glossary_cmd()
        .arg("-d")
        .arg(workspace.path().join("features"))
        .arg("-t")
        .arg(workspace.path().join("types.json"))
        .arg("-s")
        .arg(shipped_schema())
        .arg("-g")
        .arg(&output)
        .assert()
        .code(1);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(
        stderr.contains("does not match its schema"),
        "stderr: {stderr}"
    );
    assert!(!output.exists());
}

#[rstest]
fn missing_default_schema_fails(workspace: TempDir) {
    write(workspace.path(), "types.json", "[]");
    glossary_cmd()
        .current_dir(workspace.path())
        .arg("-d")
        .arg("features")
        .arg("-t")
        .arg("types.json")
        .arg("-g")
        .arg("glossary.json")
        .assert()
        .code(1);
    assert!(!workspace.path().join("glossary.json").exists());
}

#[rstest]
fn snapshot_output_with_snapshot_input_is_a_config_error(workspace: TempDir) {
    let snapshot = workspace.path().join("folder_files.json");
    let copy = workspace.path().join("copy.json");
    glossary_cmd()
        .arg("-d")
        .arg(workspace.path().join("features"))
        .arg("-o")
        .arg(&snapshot)
        .arg("-g")
        .arg(workspace.path().join("first.json"))
        .assert()
        .success();

    let output = workspace.path().join("glossary.json");
    let assert = glossary_cmd()
        .arg("-i")
        .arg(&snapshot)
        .arg("-o")
        .arg(&copy)
        .arg("-g")
        .arg(&output)
        .assert()
        .code(2);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("--folder-files-output"), "stderr: {stderr}");
    assert!(!copy.exists());
    assert!(!output.exists());
}

#[rstest]
fn invalid_environment_exits_with_config_status(workspace: TempDir) {
    glossary_cmd()
        .env("GHERKIN_GLOSSARY_LOG_LEVEL", "loud")
        .arg("-d")
        .arg(workspace.path().join("features"))
        .arg("-g")
        .arg(workspace.path().join("glossary.json"))
        .assert()
        .code(2);
}

#[test]
fn missing_source_is_a_usage_error() {
    glossary_cmd().arg("-g").arg("out.json").assert().failure();
}
