#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing or parsing an
/// expression.
pub enum ParseError {
    /// The input line did not split into exactly two operands and one
    /// operator.
    InvalidFormat {
        /// The number of whitespace-separated tokens actually found.
        found: usize,
    },
    /// An operand was neither a Roman numeral nor a decimal integer.
    InvalidOperand {
        /// The offending operand token.
        token: String,
    },
    /// A decimal operand fell outside the configured bounds.
    DecimalOutOfBounds {
        /// The offending operand token.
        token: String,
        /// The smallest allowed value.
        min:   i64,
        /// The largest allowed value.
        max:   i64,
    },
    /// One operand was Roman and the other decimal.
    MixedNotation,
    /// A character in a Roman numeral was not one of the seven Roman symbols.
    InvalidRomanSymbol {
        /// The unrecognized character.
        symbol: char,
    },
    /// The middle token was not one of `+`, `-`, `*` or `/`.
    UnsupportedOperator {
        /// The token found in operator position.
        symbol: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat { found } => write!(f,
                                                    "Expected two operands and one operator (+, -, *, /), but found {found} tokens."),

            Self::InvalidOperand { token } => write!(f,
                                                     "Operand '{token}' is neither a Roman numeral nor a decimal integer."),

            Self::DecimalOutOfBounds { token, min, max } => write!(f,
                                                                   "Decimal operand '{token}' is outside the allowed range {min} to {max}."),

            Self::MixedNotation => write!(f,
                                          "Cannot mix Roman and decimal numerals in one expression."),

            Self::InvalidRomanSymbol { symbol } => {
                write!(f, "Invalid Roman numeral symbol: '{symbol}'.")
            },

            Self::UnsupportedOperator { symbol } => {
                write!(f, "Unsupported operator: '{symbol}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
