use crate::error::EvalError;

#[derive(Debug, Clone, Copy, PartialEq)]
/// The outcome of one grammar layer: a value plus the unconsumed input, or
/// the failure that stopped parsing.
///
/// Every layer function takes the remaining input and returns exactly one
/// `Step`. The cursor in either variant is a subslice of the original input,
/// pointing at or before its end; nothing is copied and nothing is mutated.
pub(crate) enum Step<'a> {
    /// The layer consumed a prefix of the input and computed its value.
    Parsed {
        /// The numeric value of everything consumed so far.
        value: f64,
        /// The input remaining after the consumed prefix.
        rest:  &'a str,
    },
    /// The layer could not resolve a value.
    Failed(EvalError<'a>),
}

impl<'a> Step<'a> {
    /// Returns the cursor of this step: the remaining input on success, the
    /// failure position otherwise.
    ///
    /// The operator layers peek at this cursor before deciding whether an
    /// operator follows, even when the left operand already failed. That
    /// matters: in `*3` the number parser fails at `*3`, the product layer
    /// still sees the `*` and reports a product error there rather than
    /// passing the number error through.
    pub(crate) const fn context(&self) -> &'a str {
        match self {
            Self::Parsed { rest, .. } => rest,
            Self::Failed(error) => error.context(),
        }
    }

    /// Returns the failure context of the first failed step, left before
    /// right.
    ///
    /// Used by the right-recursive layers (`+`, `*`), which evaluate both
    /// operands before combining them and must pick one position to report
    /// when either is invalid.
    pub(crate) const fn of_failed_one(left: &Self, right: &Self) -> &'a str {
        match (left, right) {
            (Self::Failed(error), _) | (Self::Parsed { .. }, Self::Failed(error)) => {
                error.context()
            },
            (Self::Parsed { rest, .. }, Self::Parsed { .. }) => rest,
        }
    }
}
