//! # abaq
//!
//! abaq is a tiny evaluator for arithmetic expressions. It parses and
//! computes in a single recursive-descent pass over the input text,
//! supporting `+`, `-`, `*`, `/`, parentheses, and signed decimal numbers,
//! and reports failures as values carrying the exact input suffix at which
//! evaluation stopped.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs
)]

use crate::grammar::step::Step;

/// Provides the error type for failed evaluations.
///
/// This module defines [`error::EvalError`], which represents every way an
/// expression can fail to evaluate. Each error carries a fixed description
/// and the suffix of the input at which the failure was detected, so callers
/// can point at the offending position without any extra bookkeeping.
///
/// # Responsibilities
/// - Defines one error variant per failure mode of the grammar.
/// - Exposes the fixed description string and the input-suffix context.
/// - Integrates with standard error handling traits.
pub mod error;
/// Renders evaluation results as structured text records.
///
/// This module turns the output of [`evaluate`] into the one-line record
/// format consumed by the command-line tool, with optional terminal color
/// decoration.
///
/// # Responsibilities
/// - Serializes success and failure results with `valid`, `value`, and
///   `error` fields.
/// - Applies ANSI colors when the consumer asks for them.
pub mod format;
/// Implements the grammar as a chain of precedence layers.
///
/// Each layer is a pure function from remaining input to a parsed value plus
/// the unconsumed rest, so parsing and evaluation happen together with no
/// intermediate syntax tree. Control flows down the precedence chain (sum,
/// difference, product, fraction, term, base) and the base layer recurses
/// back to the top for parenthesized groups.
///
/// # Responsibilities
/// - Encodes precedence and associativity of the four operators.
/// - Threads the remaining-input cursor through every step.
/// - Propagates failures as values with fixed descriptions and positions.
mod grammar;

pub use error::{EvalError, EvalResult};

/// Evaluates an arithmetic expression.
///
/// Runs the grammar over `expression` in a single pass. Evaluation succeeds
/// only when the whole input is consumed: a valid prefix followed by trailing
/// input fails with [`EvalError::TrailingSymbols`] carrying the unconsumed
/// suffix. Any other failure surfaces the grammar's error verbatim.
///
/// The function is pure: the same input always yields the same result, and
/// concurrent calls need no synchronization. The error borrows from
/// `expression`, so the input must outlive the result.
///
/// # Errors
/// Returns an [`EvalError`] when the input is not a single well-formed
/// arithmetic expression; see [`EvalError::description`] for the failure
/// taxonomy.
///
/// # Examples
/// ```
/// use abaq::evaluate;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(evaluate("2+3*4"), Ok(14.0));
///
/// // Parentheses override precedence.
/// assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
///
/// // Failures carry a fixed description and the offending suffix.
/// let error = evaluate("1+1 garbage").unwrap_err();
/// assert_eq!(error.description(), "can't evaluate expression");
/// assert_eq!(error.context(), "garbage");
/// ```
pub fn evaluate(expression: &str) -> EvalResult<'_> {
    match grammar::sum(expression) {
        Step::Parsed { value, rest } if rest.is_empty() => Ok(value),
        Step::Parsed { rest, .. } => Err(EvalError::TrailingSymbols { context: rest }),
        Step::Failed(error) => Err(error),
    }
}
