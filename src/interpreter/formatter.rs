use crate::{
    ast::Notation,
    interpreter::{evaluator::EvalResult, roman},
};

/// Renders an evaluation result in the notation of its operands.
///
/// Roman-notation results go through the decimal-to-Roman conversion, which
/// rejects values that cannot be written as a Roman numeral. Decimal results
/// render as their usual string form, sign included.
///
/// # Parameters
/// - `value`: The computed result.
/// - `notation`: The notation shared by the expression's operands.
///
/// # Returns
/// The rendered result string.
///
/// # Errors
/// Returns `EvalError::OutOfRange` if `notation` is Roman and `value` is
/// zero, negative, or larger than 3999.
///
/// # Example
/// ```
/// use romana::{ast::Notation, interpreter::formatter::format_value};
///
/// assert_eq!(format_value(5, Notation::Roman).unwrap(), "V");
/// assert_eq!(format_value(-3, Notation::Decimal).unwrap(), "-3");
/// assert!(format_value(0, Notation::Roman).is_err());
/// ```
pub fn format_value(value: i64, notation: Notation) -> EvalResult<String> {
    match notation {
        Notation::Roman => roman::from_decimal(value),
        Notation::Decimal => Ok(value.to_string()),
    }
}
