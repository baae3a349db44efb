/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// expression. Parse errors include malformed input lines, unrecognizable
/// operands, mixed numeral systems, and unknown operator symbols.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while computing or rendering
/// a result. Evaluation errors include division by zero, integer overflow,
/// and results that cannot be written as Roman numerals.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
