use crate::{
    Options,
    ast::{Expression, Notation, Operand, Operator},
    error::ParseError,
    interpreter::{
        lexer::{Token, classify_word},
        roman,
    },
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a `ParseError`
/// describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one line of input into an [`Expression`].
///
/// This is the entry point for parsing. The line is split on whitespace and
/// must yield exactly three words: operand, operator, operand. Each operand
/// is classified as Roman or decimal and converted to its integer value;
/// both operands must share one notation.
///
/// # Parameters
/// - `input`: The raw input line.
/// - `options`: Evaluation options; used for the optional decimal bounds.
///
/// # Returns
/// The parsed expression.
///
/// # Errors
/// - `InvalidFormat` if the line does not split into exactly three words.
/// - `InvalidOperand`, `DecimalOutOfBounds` or `UnsupportedOperator` if a
///   word is not valid for its position.
/// - `MixedNotation` if one operand is Roman and the other decimal.
///
/// # Example
/// ```
/// use romana::{
///     Options,
///     ast::{Notation, Operator},
///     interpreter::parser::parse_expression,
/// };
///
/// let expr = parse_expression("XIV + I", &Options::default()).unwrap();
/// assert_eq!(expr.left.value, 14);
/// assert_eq!(expr.operator, Operator::Add);
/// assert_eq!(expr.notation(), Notation::Roman);
/// ```
pub fn parse_expression(input: &str, options: &Options) -> ParseResult<Expression> {
    let words: Vec<&str> = input.split_whitespace().collect();

    let [left, operator, right] = words[..] else {
        return Err(ParseError::InvalidFormat { found: words.len() });
    };

    let left = parse_operand(left, options)?;
    let operator = parse_operator(operator)?;
    let right = parse_operand(right, options)?;

    if left.notation != right.notation {
        return Err(ParseError::MixedNotation);
    }

    Ok(Expression { left,
                    operator,
                    right })
}

/// Parses a word in operand position.
///
/// Roman numerals are converted to their integer value here, so the rest of
/// the pipeline works on integers only. Decimal operands are checked against
/// the configured bounds, if any.
///
/// # Errors
/// - `InvalidOperand` if the word is not a Roman numeral or decimal integer.
/// - `DecimalOutOfBounds` if a decimal operand violates the configured
///   bounds.
/// - Propagates `InvalidRomanSymbol` from the Roman conversion.
fn parse_operand(word: &str, options: &Options) -> ParseResult<Operand> {
    match classify_word(word) {
        Some(Token::Numeral(numeral)) => Ok(Operand { value:    roman::to_decimal(&numeral)?,
                                                      notation: Notation::Roman, }),
        Some(Token::Integer(value)) => {
            if let Some(bounds) = &options.decimal_bounds {
                if !bounds.contains(&value) {
                    return Err(ParseError::DecimalOutOfBounds { token: word.to_string(),
                                                                min:   *bounds.start(),
                                                                max:   *bounds.end(), });
                }
            }
            Ok(Operand { value,
                         notation: Notation::Decimal })
        },
        _ => Err(ParseError::InvalidOperand { token: word.to_string() }),
    }
}

/// Parses the word in operator position.
///
/// # Errors
/// Returns `UnsupportedOperator` for anything other than `+`, `-`, `*` or
/// `/`.
fn parse_operator(word: &str) -> ParseResult<Operator> {
    match classify_word(word) {
        Some(Token::Plus) => Ok(Operator::Add),
        Some(Token::Minus) => Ok(Operator::Sub),
        Some(Token::Star) => Ok(Operator::Mul),
        Some(Token::Slash) => Ok(Operator::Div),
        _ => Err(ParseError::UnsupportedOperator { symbol: word.to_string() }),
    }
}
