//! JSON output helpers.

use std::fs;
use std::path::Path;

use gherkin_glossary::Glossary;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::error::CliError;

/// Render `value` as pretty JSON using `indent` spaces per level, followed by
/// a trailing newline.
///
/// # Errors
///
/// Returns `CliError::Json` if `value` cannot be serialised; `path` is used
/// only to label the error.
pub fn to_json_string<T: Serialize>(
    value: &T,
    indent: usize,
    path: &Path,
) -> Result<String, CliError> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|source| CliError::json(path, source))?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|err| {
        CliError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, err),
        )
    })
}

/// Write `value` to `path` as pretty JSON.
///
/// # Errors
///
/// Returns `CliError::Json` if serialisation fails and `CliError::Io` if the
/// file cannot be written.
pub fn write_json<T: Serialize>(value: &T, path: &Path, indent: usize) -> Result<(), CliError> {
    let rendered = to_json_string(value, indent, path)?;
    fs::write(path, rendered).map_err(|source| CliError::io(path, source))
}

/// Write the glossary document to `path`.
///
/// # Errors
///
/// Returns `CliError::Io` if the file cannot be written.
pub fn write_glossary(glossary: &Glossary, path: &Path, indent: usize) -> Result<(), CliError> {
    write_json(glossary, path, indent)?;
    info!(
        path = %path.display(),
        given = glossary.given().len(),
        when = glossary.when().len(),
        then = glossary.then().len(),
        tags = glossary.tags().len(),
        comments = glossary.comments().len(),
        "wrote glossary"
    );
    Ok(())
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn glossary() -> Glossary {
        Glossary::new(&["@t", "Given a 3 b"], &[]).expect("glossary should build")
    }

    #[test]
    fn renders_with_requested_indent() {
        let json = to_json_string(&glossary(), 4, Path::new("out.json"))
            .expect("glossary should render");
        let head = "{\n    \"given\": [\n        \"Given a {int} b\"\n    ],";
        assert!(json.starts_with(head), "unexpected rendering: {json}");
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn writes_glossary_document() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("glossary.json");
        write_glossary(&glossary(), &path, 2).expect("glossary should be written");

        let written = fs::read_to_string(&path).expect("output should exist");
        let value: serde_json::Value =
            serde_json::from_str(&written).expect("output should be JSON");
        assert_eq!(
            value.get("given"),
            Some(&serde_json::json!(["Given a {int} b"]))
        );
        assert_eq!(value.get("tags"), Some(&serde_json::json!(["@t"])));
        assert_eq!(value.get("when"), Some(&serde_json::json!([])));
    }

    #[test]
    fn reports_unwritable_path() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("missing").join("glossary.json");
        let err = write_glossary(&glossary(), &path, 2).expect_err("write should fail");
        assert!(matches!(err, CliError::Io { .. }));
    }
}
