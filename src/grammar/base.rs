use crate::{
    error::EvalError,
    grammar::{step::Step, sum},
};

/// Returns the input with its leading whitespace removed.
///
/// The whitespace set is the grammar's, not `char::is_whitespace`: space,
/// tab, newline, vertical tab, form feed, and carriage return. Vertical tab
/// (`\x0B`) is not covered by `char::is_ascii_whitespace`, hence the explicit
/// predicate.
pub(crate) fn after_whitespace(symbols: &str) -> &str {
    symbols.trim_start_matches(is_blank)
}

/// Returns `true` for the whitespace characters the grammar skips.
const fn is_blank(symbol: char) -> bool {
    matches!(symbol, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Counts the ASCII digits at `start` in `bytes`.
fn digit_run(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter()
                  .take_while(|byte| byte.is_ascii_digit())
                  .count()
}

/// Parses a signed decimal number literal.
///
/// Consumes an optional sign, optional integer digits, and an optional `.`
/// followed by fraction digits. At least one digit must be consumed overall.
///
/// The rule is: `number := [+-]? (digit* ".")? digit+`
///
/// A trailing `.` with no fraction digits is left unconsumed, so `3.` parses
/// as `3` with `.` remaining. Exponents, `inf`, and `nan` words are not part
/// of the grammar and are not accepted.
///
/// # Parameters
/// - `symbols`: The remaining input, positioned at the expected literal.
///
/// # Returns
/// `Step::Parsed` with the literal's value and the input after it, or
/// `Step::Failed` with a `MalformedNumber` error at `symbols` when no digit
/// could be consumed.
pub(crate) fn number(symbols: &str) -> Step<'_> {
    let bytes = symbols.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let integer_digits = digit_run(bytes, end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digit_run(bytes, end + 1);
        if fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return Step::Failed(EvalError::MalformedNumber { context: symbols });
    }

    match symbols[..end].parse::<f64>() {
        Ok(value) => Step::Parsed { value,
                                    rest: &symbols[end..] },
        Err(_) => Step::Failed(EvalError::MalformedNumber { context: symbols }),
    }
}

/// Parses a base: a parenthesized sub-expression or a number literal.
///
/// The rule is: `base := "(" expression ")" | number`
///
/// On `(`, the full grammar is re-entered for the inner expression; this is
/// the grammar's only recursion back to the top, so nesting depth is bounded
/// only by the call stack. The group succeeds when the inner expression
/// parses and is followed by `)`, which is consumed. Anything else, a failing
/// inner expression or a missing `)`, fails with the parentheses error
/// anchored at the opening `(`.
///
/// # Parameters
/// - `symbols`: The remaining input, with any leading whitespace already
///   stripped by [`term`].
///
/// # Returns
/// The inner expression's value past the `)`, the number literal's value, or
/// the corresponding failure.
pub(crate) fn base(symbols: &str) -> Step<'_> {
    if let Some(inner) = symbols.strip_prefix('(') {
        return match sum(inner) {
            Step::Parsed { value, rest } if rest.starts_with(')') => {
                Step::Parsed { value,
                               rest: &rest[1..] }
            },
            _ => Step::Failed(EvalError::Parentheses { context: symbols }),
        };
    }

    number(symbols)
}

/// Parses a term: a base with its surrounding whitespace stripped.
///
/// The rule is: `term := whitespace* base whitespace*`
///
/// Failures pass through with their original position; the whitespace skipped
/// before the failing base is not restored.
///
/// # Parameters
/// - `symbols`: The remaining input.
///
/// # Returns
/// The base's result, with trailing whitespace consumed on success.
pub(crate) fn term(symbols: &str) -> Step<'_> {
    match base(after_whitespace(symbols)) {
        Step::Parsed { value, rest } => Step::Parsed { value,
                                                       rest: after_whitespace(rest) },
        failed @ Step::Failed(_) => failed,
    }
}
