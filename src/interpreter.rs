/// The lexer module classifies the words of an expression.
///
/// The lexer defines the token set of the calculator and classifies each
/// whitespace-delimited word of the input line as a Roman numeral, a decimal
/// integer, or an operator symbol. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Defines the `Token` enum covering operands and operators.
/// - Classifies a single word as exactly one token, or rejects it.
/// - Leaves position-specific error reporting to the parser.
pub mod lexer;
/// The parser module builds an expression from the input line.
///
/// The parser enforces the shape of a valid expression: exactly three
/// whitespace-separated words forming operand, operator, operand. It
/// converts Roman operands to integer values and rejects expressions that
/// mix numeral systems.
///
/// # Responsibilities
/// - Splits the input line and enforces the three-token contract.
/// - Converts classified words into typed operands and operators.
/// - Rejects mixed-notation and out-of-bounds operands with precise errors.
pub mod parser;
/// Roman numeral conversion.
///
/// Bidirectional conversion between Roman numerals and integers in the range
/// 1 to 3999: a right-to-left subtractive scan for Roman-to-decimal and a
/// greedy descent over the symbol table for decimal-to-Roman.
///
/// # Responsibilities
/// - Maps single Roman symbols to their values.
/// - Converts any combination of Roman symbols to its integer value.
/// - Produces canonical Roman numerals for integers in range, rejecting all
///   others.
pub mod roman;
/// The evaluator module computes the arithmetic result.
///
/// The evaluator applies the parsed operator to the two operand values using
/// checked integer arithmetic, reporting division by zero and overflow as
/// errors.
///
/// # Responsibilities
/// - Applies `+`, `-`, `*` and truncating `/` over `i64`.
/// - Reports division by zero and arithmetic overflow.
pub mod evaluator;
/// The formatter module renders the result.
///
/// The formatter turns the computed integer back into text in the notation
/// the operands were written in: a Roman numeral when both operands were
/// Roman, a decimal string otherwise.
///
/// # Responsibilities
/// - Routes Roman-notation results through the decimal-to-Roman conversion.
/// - Renders decimal results with their sign.
pub mod formatter;
