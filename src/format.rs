use crossterm::style::Stylize;

use crate::error::EvalResult;

/// Renders an evaluation result as a structured text record.
///
/// The record always carries the three fields `valid`, `value`, and `error`:
///
/// ```text
/// { valid: true; value: 14; error: { description: ""; context: ""; }; }
/// { valid: false; value: NaN; error: { description: "malformed number"; context: "x"; }; }
/// ```
///
/// On failure the value is `NaN` and the error fields hold the failure's
/// description and context; on success both error fields are empty. With
/// `decorate` set, the value is colored green on success and the error record
/// red on failure, using ANSI escape sequences.
///
/// # Parameters
/// - `result`: The evaluation result to render.
/// - `decorate`: Whether to apply terminal colors.
///
/// # Returns
/// The record as an owned string, one line, no trailing newline.
///
/// # Example
/// ```
/// use abaq::{evaluate, format::serialize};
///
/// let record = serialize(&evaluate("2+3*4"), false);
/// assert_eq!(record,
///            "{ valid: true; value: 14; error: { description: \"\"; context: \"\"; }; }");
/// ```
#[must_use]
pub fn serialize(result: &EvalResult<'_>, decorate: bool) -> String {
    let (valid, value, description, context) = match result {
        Ok(value) => (true, *value, "", ""),
        Err(error) => (false, f64::NAN, error.description(), error.context()),
    };

    let value = value.to_string();
    let error = format!("{{ description: \"{description}\"; context: \"{context}\"; }}");

    let (value, error) = match (decorate, valid) {
        (true, true) => (value.green().to_string(), error),
        (true, false) => (value, error.red().to_string()),
        (false, _) => (value, error),
    };

    format!("{{ valid: {valid}; value: {value}; error: {error}; }}")
}
