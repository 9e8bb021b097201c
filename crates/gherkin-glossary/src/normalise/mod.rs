//! Term normalisation.
//!
//! Steps that differ only in a literal value describe the same vocabulary
//! entry. The pipeline rewrites those literals into fixed placeholder tokens
//! so that such steps collapse together once collected into a set:
//!
//! 1. `"<name>"` becomes `<data table>`
//! 2. whitespace-bounded integers become `{int}`
//! 3. `"text"` becomes `{string}`
//! 4. whitespace runs collapse to one space and trailing whitespace is removed
//! 5. each custom type value becomes `{<custom type>}`, followed by another
//!    whitespace pass

mod custom_type;
mod placeholder;

pub use custom_type::CustomType;
pub use placeholder::{DATA_TABLE, INT, STRING};

/// Canonicalise a resolved statement.
///
/// # Examples
///
/// ```
/// use gherkin_glossary::{CustomType, normalise_statement};
///
/// assert_eq!(
///     normalise_statement("Given I add 42 items", &[]),
///     "Given I add {int} items"
/// );
///
/// let color = [CustomType::new("color", ["red", "blue"])];
/// assert_eq!(
///     normalise_statement("Given the car is red", &color),
///     "Given the car is {color}"
/// );
/// ```
#[must_use]
pub fn normalise_statement(statement: &str, custom_types: &[CustomType]) -> String {
    let literals = placeholder::replace_literals(statement);
    custom_type::replace_custom_types(&literals, custom_types)
}
