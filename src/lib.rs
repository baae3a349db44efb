//! # romana
//!
//! romana is a command-line calculator for Roman and decimal numeral
//! arithmetic. It evaluates a single infix expression of two operands and
//! one binary operator, where both operands are written either as Roman
//! numerals or as decimal integers, and renders the result in the same
//! notation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::ops::RangeInclusive;

use crate::interpreter::{evaluator::eval_binary_op, formatter::format_value,
                         parser::parse_expression};

/// Defines the structure of a parsed expression.
///
/// This module declares the `Expression` type and its parts: operands with
/// their notation, and the closed set of arithmetic operators. The types are
/// built by the parser and consumed by the evaluator and formatter.
///
/// # Responsibilities
/// - Defines operand, operator, and notation types.
/// - Guarantees an expression carries exactly two operands and one operator.
/// - Exposes the notation shared by both operands for result rendering.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating an expression. It standardizes error reporting
/// with one variant per failure mode and human-readable messages.
///
/// # Responsibilities
/// - Defines error enums for the parse stage and the evaluation stage.
/// - Carries the offending token, symbol, or value for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together word classification, parsing, Roman numeral
/// conversion, arithmetic evaluation, and result formatting to provide the
/// complete calculator. Each stage is a plain function; any stage failure
/// aborts the evaluation.
///
/// # Responsibilities
/// - Coordinates the pipeline stages: lexer, parser, evaluator, formatter.
/// - Converts between Roman numerals and integers.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;

/// Configuration for one evaluation.
///
/// The defaults match the common behavior: decimal operands are any `i64`.
/// Some observed variants of this calculator restrict decimal operands to a
/// small range; that restriction is opt-in here rather than hard-coded.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// When set, decimal operands must fall inside this inclusive range.
    /// Roman operands and the result are unaffected.
    pub decimal_bounds: Option<RangeInclusive<i64>>,
}

/// Evaluates one expression and returns the rendered result.
///
/// This is the public entry point. The input line is parsed into two
/// operands and an operator, the operation is applied, and the result is
/// rendered in the notation the operands were written in: a Roman numeral
/// when both operands were Roman, a decimal string otherwise.
///
/// # Errors
/// Returns an error if the line is malformed, the operands mix notations,
/// the arithmetic fails (division by zero, overflow), or a Roman-notation
/// result falls outside 1 to 3999.
///
/// # Examples
/// ```
/// use romana::{Options, evaluate};
///
/// // Roman operands produce a Roman result.
/// let result = evaluate("III + II", &Options::default()).unwrap();
/// assert_eq!(result, "V");
///
/// // Decimal operands produce a decimal result.
/// let result = evaluate("3 + 2", &Options::default()).unwrap();
/// assert_eq!(result, "5");
///
/// // Mixing notations is an error.
/// assert!(evaluate("III + 2", &Options::default()).is_err());
/// ```
pub fn evaluate(input: &str, options: &Options) -> Result<String, Box<dyn std::error::Error>> {
    let expression = parse_expression(input, options)?;

    let value = eval_binary_op(expression.operator,
                               expression.left.value,
                               expression.right.value)?;

    Ok(format_value(value, expression.notation())?)
}
