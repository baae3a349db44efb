use crate::interpreter::roman;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression or
/// rendering its result.
pub enum EvalError {
    /// Attempted division by zero.
    DivisionByZero,
    /// A Roman-notation result was zero, negative, or larger than 3999.
    OutOfRange {
        /// The value that cannot be written as a Roman numeral.
        value: i64,
    },
    /// Arithmetic on the operands overflowed the integer type.
    Overflow,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::OutOfRange { value } => write!(f,
                                                 "Result {value} cannot be written as a Roman numeral; it must be between {} and {}.",
                                                 roman::MIN,
                                                 roman::MAX),

            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for EvalError {}
