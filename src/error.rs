/// Evaluation errors.
///
/// Defines the error type returned when an expression cannot be evaluated.
/// Every failure carries a fixed human-readable description and the suffix of
/// the input at which evaluation failed or stopped.
pub mod eval_error;

pub use eval_error::{EvalError, EvalResult};
