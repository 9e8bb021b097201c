//! Loading and validating custom placeholder types.
//!
//! The custom types file holds a JSON array of objects:
//!
//! ```json
//! [
//!   { "custom_type": "color", "valid_values": ["red", "blue"] }
//! ]
//! ```
//!
//! It is checked against a user-supplied JSON Schema before it is parsed.
//! The workspace ships a `schema.json` describing the shape above.

use std::fs;
use std::path::Path;

use gherkin_glossary::CustomType;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::CliError;

/// Schema path used when none is given.
pub const DEFAULT_SCHEMA: &str = "schema.json";

/// Read the custom types at `path` and validate them against the JSON Schema
/// at `schema_path`.
///
/// # Errors
///
/// Returns `CliError::Io` or `CliError::Json` if either file cannot be read
/// as JSON, `CliError::InvalidSchema` if the schema does not compile,
/// `CliError::SchemaViolation` if the custom types break the schema,
/// `CliError::Json` if they are not an array of custom type objects, and
/// `CliError::InvalidCustomType` if an entry lists an empty value.
pub fn load_custom_types(path: &Path, schema_path: &Path) -> Result<Vec<CustomType>, CliError> {
    let schema = read_json(schema_path)?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|err| CliError::invalid_schema(schema_path, err))?;
    debug!(schema = %schema_path.display(), "compiled custom types schema");

    let document = read_json(path)?;
    validator
        .validate(&document)
        .map_err(|err| CliError::schema_violation(path, err))?;

    let custom_types: Vec<CustomType> =
        serde_json::from_value(document).map_err(|source| CliError::json(path, source))?;
    validate_custom_types(&custom_types)?;
    info!(
        path = %path.display(),
        count = custom_types.len(),
        "loaded custom types"
    );
    Ok(custom_types)
}

/// Reject empty values, which would match between every character of a
/// step.
///
/// # Errors
///
/// Returns `CliError::InvalidCustomType` for the first entry holding an empty
/// value.
pub fn validate_custom_types(custom_types: &[CustomType]) -> Result<(), CliError> {
    for (index, custom_type) in custom_types.iter().enumerate() {
        if custom_type.valid_values.iter().any(String::is_empty) {
            return Err(CliError::InvalidCustomType {
                index,
                reason: format!(
                    "valid_values of '{}' must not contain empty strings",
                    custom_type.custom_type
                ),
            });
        }
    }
    Ok(())
}

fn read_json(path: &Path) -> Result<Value, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::io(path, source))?;
    serde_json::from_str(&text).map_err(|source| CliError::json(path, source))
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    const PERMISSIVE_SCHEMA: &str = "{}";

    struct Files {
        dir: TempDir,
    }

    impl Files {
        fn write(&self, name: &str, json: &str) -> PathBuf {
            let path = self.dir.path().join(name);
            fs::write(&path, json).expect("failed to write file");
            path
        }

        fn load(&self, json: &str) -> Result<Vec<CustomType>, CliError> {
            self.load_with(json, &shipped_schema())
        }

        fn load_with(&self, json: &str, schema: &Path) -> Result<Vec<CustomType>, CliError> {
            let path = self.write("custom_types.json", json);
            load_custom_types(&path, schema)
        }
    }

    fn shipped_schema() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../schema.json")
    }

    #[fixture]
    fn files() -> Files {
        Files {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    #[rstest]
    fn loads_valid_types_in_order(files: Files) {
        let json = r#"[
            {"custom_type": "color", "valid_values": ["red", "blue"]},
            {"custom_type": "size", "valid_values": ["small"]}
        ]"#;
        let types = files.load(json).expect("custom types should load");
        assert_eq!(
            types,
            vec![
                CustomType::new("color", ["red", "blue"]),
                CustomType::new("size", ["small"]),
            ]
        );
    }

    #[rstest]
    #[case("[]")]
    #[case(r#"[{"custom_type": "shade of grey", "valid_values": ["slate"]}]"#)]
    #[case(r#"[{"custom_type": "unused", "valid_values": []}]"#)]
    fn accepts_what_the_schema_allows(files: Files, #[case] json: &str) {
        assert!(files.load(json).is_ok());
    }

    #[rstest]
    #[case(r#"{"custom_type": "color", "valid_values": ["red"]}"#)]
    #[case(r#"[{"custom_type": "color"}]"#)]
    #[case(r#"[{"custom_type": "color", "valid_values": "red"}]"#)]
    #[case(r#"[{"custom_type": 7, "valid_values": ["red"]}]"#)]
    #[case(r#"[{"custom_type": "color", "valid_values": ["red"], "colour": true}]"#)]
    fn rejects_documents_breaking_the_schema(files: Files, #[case] json: &str) {
        let err = files.load(json).expect_err("document should be rejected");
        assert!(
            matches!(err, CliError::SchemaViolation { .. }),
            "unexpected error: {err}"
        );
    }

    #[rstest]
    fn permissive_schema_still_requires_the_record_shape(files: Files) {
        let schema = files.write("schema.json", PERMISSIVE_SCHEMA);
        let err = files
            .load_with(r#"[{"custom_type": "color"}]"#, &schema)
            .expect_err("missing values should be rejected");
        assert!(matches!(err, CliError::Json { .. }));
    }

    #[rstest]
    fn rejects_empty_values(files: Files) {
        let json = r#"[
            {"custom_type": "x", "valid_values": ["a"]},
            {"custom_type": "y", "valid_values": ["b", ""]}
        ]"#;
        let err = files.load(json).expect_err("empty value should be rejected");
        assert!(matches!(err, CliError::InvalidCustomType { index: 1, .. }));
        assert!(
            err.to_string().contains("empty strings"),
            "unexpected message: {err}"
        );
    }

    #[rstest]
    fn rejects_schema_that_does_not_compile(files: Files) {
        let schema = files.write("schema.json", r#"{"type": 12}"#);
        let err = files
            .load_with("[]", &schema)
            .expect_err("schema should be rejected");
        assert!(matches!(err, CliError::InvalidSchema { .. }));
    }

    #[rstest]
    fn missing_schema_is_an_io_error_naming_it(files: Files) {
        let schema = files.dir.path().join("absent-schema.json");
        let err = files
            .load_with("[]", &schema)
            .expect_err("missing schema should fail");
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().contains("absent-schema.json"));
    }

    #[rstest]
    fn missing_custom_types_file_is_an_io_error(files: Files) {
        let err = load_custom_types(&files.dir.path().join("absent.json"), &shipped_schema())
            .expect_err("missing file should fail");
        assert!(matches!(err, CliError::Io { .. }));
    }
}
