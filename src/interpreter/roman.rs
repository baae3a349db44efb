use crate::{
    error::{EvalError, ParseError},
    interpreter::{evaluator::EvalResult, parser::ParseResult},
};

/// Smallest value representable as a Roman numeral.
pub const MIN: i64 = 1;
/// Largest value representable as a Roman numeral.
pub const MAX: i64 = 3999;

/// Descending (value, symbol) pairs used by the greedy decimal-to-Roman
/// conversion. Includes the subtractive pairs such as `CM` and `IV`.
const DESCENDING: [(i64, &str); 13] = [(1000, "M"),
                                       (900, "CM"),
                                       (500, "D"),
                                       (400, "CD"),
                                       (100, "C"),
                                       (90, "XC"),
                                       (50, "L"),
                                       (40, "XL"),
                                       (10, "X"),
                                       (9, "IX"),
                                       (5, "V"),
                                       (4, "IV"),
                                       (1, "I")];

/// Returns the integer value of a single Roman symbol.
///
/// # Errors
/// Returns `ParseError::InvalidRomanSymbol` if the character is not one of
/// the seven Roman symbols.
///
/// # Example
/// ```
/// use romana::interpreter::roman::symbol_value;
///
/// assert_eq!(symbol_value('X').unwrap(), 10);
/// assert!(symbol_value('Q').is_err());
/// ```
pub const fn symbol_value(symbol: char) -> ParseResult<i64> {
    match symbol {
        'I' => Ok(1),
        'V' => Ok(5),
        'X' => Ok(10),
        'L' => Ok(50),
        'C' => Ok(100),
        'D' => Ok(500),
        'M' => Ok(1000),
        _ => Err(ParseError::InvalidRomanSymbol { symbol }),
    }
}

/// Converts a Roman numeral to its integer value.
///
/// The numeral is scanned right to left. A symbol smaller than the largest
/// symbol seen so far is subtractive (the `I` in `IV`); every other symbol
/// is added and becomes the new largest. Well-formedness is not checked, so
/// non-canonical numerals such as `IIII` convert to their additive value.
///
/// # Parameters
/// - `numeral`: The Roman numeral to convert.
///
/// # Returns
/// The integer value of the numeral.
///
/// # Errors
/// Returns `ParseError::InvalidRomanSymbol` on the first character that is
/// not a Roman symbol.
///
/// # Example
/// ```
/// use romana::interpreter::roman::to_decimal;
///
/// assert_eq!(to_decimal("XIV").unwrap(), 14);
/// assert_eq!(to_decimal("MCMXCIV").unwrap(), 1994);
/// assert_eq!(to_decimal("IIII").unwrap(), 4);
/// assert!(to_decimal("XQI").is_err());
/// ```
pub fn to_decimal(numeral: &str) -> ParseResult<i64> {
    let mut total = 0;
    let mut prev_value = 0;

    for symbol in numeral.chars().rev() {
        let value = symbol_value(symbol)?;

        if value < prev_value {
            total -= value;
        } else {
            total += value;
            prev_value = value;
        }
    }

    Ok(total)
}

/// Converts an integer to its canonical Roman numeral.
///
/// Greedy descent over the (value, symbol) table: the largest applicable
/// value is subtracted and its symbol appended until the remainder is zero.
///
/// # Parameters
/// - `value`: The integer to convert; must lie in `MIN..=MAX`.
///
/// # Returns
/// The canonical Roman numeral for `value`.
///
/// # Errors
/// Returns `EvalError::OutOfRange` if `value` is zero, negative, or larger
/// than `MAX`.
///
/// # Example
/// ```
/// use romana::interpreter::roman::from_decimal;
///
/// assert_eq!(from_decimal(14).unwrap(), "XIV");
/// assert_eq!(from_decimal(3999).unwrap(), "MMMCMXCIX");
/// assert!(from_decimal(0).is_err());
/// assert!(from_decimal(4000).is_err());
/// ```
pub fn from_decimal(value: i64) -> EvalResult<String> {
    if !(MIN..=MAX).contains(&value) {
        return Err(EvalError::OutOfRange { value });
    }

    let mut remainder = value;
    let mut numeral = String::new();

    for (step, symbol) in DESCENDING {
        while remainder >= step {
            numeral.push_str(symbol);
            remainder -= step;
        }
    }

    Ok(numeral)
}
