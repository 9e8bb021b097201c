//! Domain-specific literal substitution.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::placeholder::{collapse_whitespace, padded};

/// A user-defined placeholder type and the literal values it stands for.
///
/// Values are matched as plain substrings, not whole words: a `color` type
/// listing `red` also rewrites the `red` inside `bored`.
///
/// # Examples
///
/// ```
/// use gherkin_glossary::CustomType;
///
/// let color = CustomType::new("color", ["red", "blue"]);
/// assert_eq!(color.placeholder(), "{color}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomType {
    /// Name rendered inside the placeholder braces.
    pub custom_type: String,
    /// Literal values replaced by the placeholder, applied in order.
    pub valid_values: Vec<String>,
}

impl CustomType {
    /// Create a custom type from a name and its literal values.
    #[must_use]
    pub fn new<I, V>(custom_type: impl Into<String>, valid_values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            custom_type: custom_type.into(),
            valid_values: valid_values.into_iter().map(Into::into).collect(),
        }
    }

    /// Placeholder text for this type, e.g. `{color}`.
    #[must_use]
    pub fn placeholder(&self) -> String {
        format!("{{{}}}", self.custom_type)
    }
}

/// Replace every custom-type value in `statement`, type by type and value by
/// value, then tidy whitespace.
///
/// Empty values are skipped since they would match between every character.
pub(crate) fn replace_custom_types(statement: &str, custom_types: &[CustomType]) -> String {
    let mut replaced = statement.to_string();
    for custom_type in custom_types {
        let placeholder = padded(&custom_type.placeholder());
        for value in custom_type.valid_values.iter().filter(|v| !v.is_empty()) {
            if replaced.contains(value.as_str()) {
                trace!(
                    value = %value,
                    placeholder = %placeholder.trim(),
                    "substituting custom type"
                );
                replaced = replaced.replace(value.as_str(), &placeholder);
            }
        }
    }
    collapse_whitespace(&replaced)
}
