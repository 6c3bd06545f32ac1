/// Atomic productions of the grammar.
///
/// Parses the pieces every operator layer bottoms out in: decimal number
/// literals, parenthesized sub-expressions, and the whitespace-stripping term
/// wrapper around them.
///
/// # Responsibilities
/// - Scans signed decimal literals and converts them to `f64`.
/// - Re-enters the full grammar for `( ... )` groups.
/// - Skips the whitespace surrounding every base.
pub mod base;
/// Binary-operator layers of the grammar.
///
/// One function per precedence level, ordered lowest to highest: sum,
/// difference, product, fraction. Each layer parses its operands by calling
/// the next-higher layer and combines them into a running value, so parsing
/// and evaluation happen in a single pass with no syntax tree.
///
/// # Responsibilities
/// - Encodes operator precedence through the call chain.
/// - Encodes associativity: `-` and `/` iterate (left), `+` and `*` recurse
///   (right).
/// - Rewrites operand failures into the operator's own error, keeping the
///   failing operand's position.
pub mod binary;
/// The intermediate result threaded through every grammar layer.
///
/// Declares [`Step`], the parsed-value-plus-remaining-input pair each layer
/// returns, together with the cursor accessor the operator layers peek
/// through.
pub mod step;

pub(crate) use binary::sum;
