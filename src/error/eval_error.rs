/// The result of evaluating one expression: the computed number, or the error
/// that stopped evaluation.
pub type EvalResult<'a> = Result<f64, EvalError<'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Every variant carries `context`: the suffix of the original input at which
/// the failure was detected. The suffix borrows from the caller's input, so an
/// `EvalError` never outlives the expression it describes.
pub enum EvalError<'a> {
    /// No digit could be consumed where a number was required.
    MalformedNumber {
        /// The input suffix starting at the expected number.
        context: &'a str,
    },
    /// A `(` was not followed by a valid expression and a closing `)`.
    Parentheses {
        /// The input suffix starting at the opening `(`.
        context: &'a str,
    },
    /// The right operand of `/` failed to parse.
    Division {
        /// The input suffix at the failing operand.
        context: &'a str,
    },
    /// An operand of `*` failed to parse.
    Product {
        /// The input suffix at the failing operand.
        context: &'a str,
    },
    /// The right operand of `-` failed to parse.
    Subtraction {
        /// The input suffix at the failing operand.
        context: &'a str,
    },
    /// An operand of `+` failed to parse.
    Addition {
        /// The input suffix at the failing operand.
        context: &'a str,
    },
    /// The expression parsed, but trailing input was left unconsumed.
    TrailingSymbols {
        /// The unconsumed suffix.
        context: &'a str,
    },
}

impl<'a> EvalError<'a> {
    /// Returns the fixed human-readable reason for this error.
    ///
    /// The returned strings are stable: consumers may match on them.
    ///
    /// # Example
    /// ```
    /// use abaq::error::EvalError;
    ///
    /// let error = EvalError::MalformedNumber { context: "abc" };
    /// assert_eq!(error.description(), "malformed number");
    /// ```
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MalformedNumber { .. } => "malformed number",
            Self::Parentheses { .. } => "can't evaluate expression inside parentheses",
            Self::Division { .. } => "division operator has malformed arguments",
            Self::Product { .. } => "product operator has malformed arguments",
            Self::Subtraction { .. } => "substraction operator has malformed arguments",
            Self::Addition { .. } => "addition operator has malformed arguments",
            Self::TrailingSymbols { .. } => "can't evaluate expression",
        }
    }

    /// Returns the suffix of the input at which the failure was detected.
    ///
    /// The suffix is always a valid (possibly empty) tail of the evaluated
    /// expression.
    ///
    /// # Example
    /// ```
    /// use abaq::error::EvalError;
    ///
    /// let error = EvalError::TrailingSymbols { context: "garbage" };
    /// assert_eq!(error.context(), "garbage");
    /// ```
    #[must_use]
    pub const fn context(&self) -> &'a str {
        match self {
            Self::MalformedNumber { context }
            | Self::Parentheses { context }
            | Self::Division { context }
            | Self::Product { context }
            | Self::Subtraction { context }
            | Self::Addition { context }
            | Self::TrailingSymbols { context } => context,
        }
    }
}

impl std::fmt::Display for EvalError<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at '{}'", self.description(), self.context())
    }
}

impl std::error::Error for EvalError<'_> {}
