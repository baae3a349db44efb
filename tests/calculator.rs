use romana::{
    Options,
    error::{EvalError, ParseError},
    evaluate,
    interpreter::roman,
};

fn assert_result(src: &str, expected: &str) {
    match evaluate(src, &Options::default()) {
        Ok(result) => assert_eq!(result, expected, "'{src}' evaluated to the wrong result"),
        Err(e) => panic!("'{src}' failed but was expected to succeed: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    let error = evaluate(src, &Options::default()).expect_err("expression succeeded but was expected to fail");
    *error.downcast::<ParseError>()
          .unwrap_or_else(|e| panic!("'{src}' failed with a non-parse error: {e}"))
}

fn eval_error(src: &str) -> EvalError {
    let error = evaluate(src, &Options::default()).expect_err("expression succeeded but was expected to fail");
    *error.downcast::<EvalError>()
          .unwrap_or_else(|e| panic!("'{src}' failed with a non-eval error: {e}"))
}

#[test]
fn roman_arithmetic() {
    assert_result("III + II", "V");
    assert_result("X - I", "IX");
    assert_result("IV * III", "XII");
    assert_result("X / II", "V");
}

#[test]
fn decimal_arithmetic() {
    assert_result("3 + 2", "5");
    assert_result("10 - 4", "6");
    assert_result("6 * 7", "42");
    assert_result("10 / 5", "2");
}

#[test]
fn division_truncates() {
    assert_result("7 / 2", "3");
    assert_result("VII / II", "III");
    assert_result("1 / 3", "0");
}

#[test]
fn decimal_results_can_be_negative() {
    assert_result("2 - 5", "-3");
    assert_result("0 - 100", "-100");
}

#[test]
fn subtractive_numerals() {
    assert_result("XIV + I", "XV");
    assert_result("MCMXCIV + V", "MCMXCIX");
    assert_result("CD + C", "D");
}

#[test]
fn non_canonical_numerals_are_accepted() {
    assert_result("IIII + I", "V");
    assert_result("VV + V", "XV");
}

#[test]
fn interior_whitespace_is_tolerated() {
    assert_result("  III   +  II ", "V");
    assert_result("\t3\t+\t2\t", "5");
}

#[test]
fn mixed_notation_is_rejected() {
    assert!(matches!(parse_error("III + 2"), ParseError::MixedNotation));
    assert!(matches!(parse_error("2 + III"), ParseError::MixedNotation));
}

#[test]
fn wrong_token_count_is_rejected() {
    assert!(matches!(parse_error("1 + 2 + 3"), ParseError::InvalidFormat { found: 5 }));
    assert!(matches!(parse_error("42"), ParseError::InvalidFormat { found: 1 }));
    assert!(matches!(parse_error(""), ParseError::InvalidFormat { found: 0 }));
    assert!(matches!(parse_error("1 +"), ParseError::InvalidFormat { found: 2 }));
}

#[test]
fn unrecognizable_operands_are_rejected() {
    assert!(matches!(parse_error("abc + 2"), ParseError::InvalidOperand { .. }));
    assert!(matches!(parse_error("12X + 2"), ParseError::InvalidOperand { .. }));
    assert!(matches!(parse_error("X3 + X"), ParseError::InvalidOperand { .. }));
    assert!(matches!(parse_error("+ + 2"), ParseError::InvalidOperand { .. }));
    assert!(matches!(parse_error("1.5 + 2"), ParseError::InvalidOperand { .. }));
}

#[test]
fn unsupported_operators_are_rejected() {
    assert!(matches!(parse_error("3 % 2"), ParseError::UnsupportedOperator { .. }));
    assert!(matches!(parse_error("3 plus 2"), ParseError::UnsupportedOperator { .. }));
    assert!(matches!(parse_error("III X II"), ParseError::UnsupportedOperator { .. }));
}

#[test]
fn division_by_zero_is_rejected() {
    assert!(matches!(eval_error("10 / 0"), EvalError::DivisionByZero));
    assert!(matches!(eval_error("0 / 0"), EvalError::DivisionByZero));
}

#[test]
fn roman_results_must_be_representable() {
    // 1000 * 1000 is far beyond 3999.
    assert!(matches!(eval_error("M * M"), EvalError::OutOfRange { value: 1_000_000 }));
    // Zero and negative results have no Roman numeral.
    assert!(matches!(eval_error("I - I"), EvalError::OutOfRange { value: 0 }));
    assert!(matches!(eval_error("I - V"), EvalError::OutOfRange { value: -4 }));
    // The largest representable result still succeeds.
    assert_result("MMMCMXCVIII + I", "MMMCMXCIX");
    assert!(matches!(eval_error("MMMCMXCIX + I"), EvalError::OutOfRange { value: 4000 }));
}

#[test]
fn decimal_results_are_unbounded_by_roman_range() {
    assert_result("1000 * 1000", "1000000");
}

#[test]
fn overflow_is_reported() {
    let max = i64::MAX.to_string();
    let src = format!("{max} + 1");
    assert!(matches!(eval_error(&src), EvalError::Overflow));

    let src = format!("{max} * 2");
    assert!(matches!(eval_error(&src), EvalError::Overflow));
}

#[test]
fn bounded_decimal_operands() {
    let options = Options { decimal_bounds: Some(1..=10) };

    assert_eq!(evaluate("10 + 1", &options).unwrap(), "11");

    let error = evaluate("11 + 1", &options).unwrap_err();
    let error = *error.downcast::<ParseError>().unwrap();
    assert!(matches!(error, ParseError::DecimalOutOfBounds { min: 1, max: 10, .. }));

    let error = evaluate("5 + 0", &options).unwrap_err();
    let error = *error.downcast::<ParseError>().unwrap();
    assert!(matches!(error, ParseError::DecimalOutOfBounds { .. }));

    // Roman operands are unaffected by the decimal bounds.
    assert_eq!(evaluate("C + C", &options).unwrap(), "CC");
}

#[test]
fn roman_conversion_round_trips() {
    for n in roman::MIN..=roman::MAX {
        let numeral = roman::from_decimal(n).unwrap_or_else(|e| panic!("{n} failed to convert: {e}"));
        let back = roman::to_decimal(&numeral).unwrap_or_else(|e| panic!("{numeral} failed to convert: {e}"));
        assert_eq!(back, n, "round trip through '{numeral}' changed the value");
    }
}

#[test]
fn error_messages_are_human_readable() {
    let error = evaluate("III + 2", &Options::default()).unwrap_err();
    assert_eq!(error.to_string(),
               "Cannot mix Roman and decimal numerals in one expression.");

    let error = evaluate("10 / 0", &Options::default()).unwrap_err();
    assert_eq!(error.to_string(), "Division by zero.");

    let error = evaluate("M * M", &Options::default()).unwrap_err();
    assert_eq!(error.to_string(),
               "Result 1000000 cannot be written as a Roman numeral; it must be between 1 and 3999.");
}
