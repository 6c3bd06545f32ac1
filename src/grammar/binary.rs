use crate::{
    error::EvalError,
    grammar::{base::term, step::Step},
};

/// Parses a fraction: left-associative division.
///
/// The rule is: `fraction := term | fraction "/" term`
///
/// Division chains are folded iteratively into a running left value, so
/// `100/10/5` computes `(100/10)/5 = 2`. A failing right operand stops the
/// loop and rewrites the failure to the division error at the operand's
/// position. Division by zero is not a failure; the result follows IEEE-754
/// semantics, so `1/0` evaluates to infinity.
///
/// # Parameters
/// - `symbols`: The remaining input.
///
/// # Returns
/// The accumulated quotient and the input after the last term, or the first
/// failure encountered.
pub(crate) fn fraction(symbols: &str) -> Step<'_> {
    let mut left = term(symbols);

    while let Step::Parsed { value, rest } = left {
        let Some(after_slash) = rest.strip_prefix('/') else {
            return Step::Parsed { value, rest };
        };

        left = match term(after_slash) {
            Step::Parsed { value: divisor, rest } => Step::Parsed { value: value / divisor,
                                                                    rest },
            Step::Failed(error) => {
                Step::Failed(EvalError::Division { context: error.context() })
            },
        };
    }

    left
}

/// Parses a product: right-associative multiplication.
///
/// The rule is: `product := fraction | fraction "*" product`
///
/// The right operand is parsed by recursing into this same production, so
/// `2*3*4` groups as `2*(3*4)`. The `*` is peeked on the left step's cursor
/// whether or not the left operand parsed; when either side is invalid the
/// result is the product error positioned at the first failing side, left
/// before right.
///
/// # Parameters
/// - `symbols`: The remaining input.
///
/// # Returns
/// The product of both sides and the input after the right operand, or the
/// product error.
pub(crate) fn product(symbols: &str) -> Step<'_> {
    let left = fraction(symbols);

    let Some(after_star) = left.context().strip_prefix('*') else {
        return left;
    };

    let right = product(after_star);

    match (left, right) {
        (Step::Parsed { value: multiplicand, .. }, Step::Parsed { value: multiplier, rest }) => {
            Step::Parsed { value: multiplicand * multiplier,
                           rest }
        },
        (left, right) => {
            Step::Failed(EvalError::Product { context: Step::of_failed_one(&left, &right) })
        },
    }
}

/// Parses a difference: left-associative subtraction.
///
/// The rule is: `difference := product | difference "-" product`
///
/// Folds iteratively like [`fraction`], so `10-2-3` computes
/// `(10-2)-3 = 5`. A failing right operand becomes the subtraction error at
/// the operand's position.
///
/// # Parameters
/// - `symbols`: The remaining input.
///
/// # Returns
/// The accumulated difference, or the first failure encountered.
pub(crate) fn difference(symbols: &str) -> Step<'_> {
    let mut left = product(symbols);

    while let Step::Parsed { value, rest } = left {
        let Some(after_minus) = rest.strip_prefix('-') else {
            return Step::Parsed { value, rest };
        };

        left = match product(after_minus) {
            Step::Parsed { value: subtrahend, rest } => Step::Parsed { value: value - subtrahend,
                                                                       rest },
            Step::Failed(error) => {
                Step::Failed(EvalError::Subtraction { context: error.context() })
            },
        };
    }

    left
}

/// Parses a sum: right-associative addition.
///
/// The rule is: `sum := difference | difference "+" sum`
///
/// The grammar's entry production. Recurses like [`product`], so `1+2+3`
/// groups as `1+(2+3)`. When either side is invalid the result is the
/// addition error positioned at the first failing side, left before right.
///
/// # Parameters
/// - `symbols`: The remaining input.
///
/// # Returns
/// The sum of both sides, or the addition error.
pub(crate) fn sum(symbols: &str) -> Step<'_> {
    let left = difference(symbols);

    let Some(after_plus) = left.context().strip_prefix('+') else {
        return left;
    };

    let right = sum(after_plus);

    match (left, right) {
        (Step::Parsed { value: augend, .. }, Step::Parsed { value: addend, rest }) => {
            Step::Parsed { value: augend + addend,
                           rest }
        },
        (left, right) => {
            Step::Failed(EvalError::Addition { context: Step::of_failed_one(&left, &right) })
        },
    }
}
