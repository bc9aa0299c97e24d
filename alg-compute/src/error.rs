//! Errors that can occur while evaluating an expression.
//!
//! Errors raised by an operator carry three spans: the left operand, the operator, and the right
//! operand, in that order.

use alg_attrs::ErrorKind;
use alg_error::{ErrorKind, EXPR};
use ariadne::Fmt;
use crate::algebra::{ArithmeticError, ParseTermError};
use std::ops::Range;

pub use alg_error::Error;

/// A term literal could not be read.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid term: {}", reason),
    labels = ["this term"],
    help = if *reason == ParseTermError::Overflow {
        format!("coefficients must be at most {}", i64::MAX)
    } else {
        format!("a term is written like {}", "4x^2y".fg(EXPR))
    },
)]
pub struct InvalidLiteral {
    /// Why the literal could not be read.
    pub reason: ParseTermError,
}

/// The right-hand side of `^` is not a constant integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent must be a constant integer",
    labels = ["", "", "this exponent contains a variable"],
    help = format!("try expanding the power by hand, such as {} for {}", "(x+1)(x+1)".fg(EXPR), "(x+1)^2".fg(EXPR)),
)]
pub struct NonIntegerExponent;

/// The right-hand side of `^` is negative.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent must not be negative",
    labels = ["", "", "this exponent is negative"],
    help = "a negative exponent would produce a fraction, which is not a polynomial",
)]
pub struct NegativeExponent;

/// The divisor does not divide the dividend exactly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot divide these expressions",
    labels = ["this expression", "", "does not divide the expression evenly"],
    help = "the divisor must be a single term that divides every term of the dividend",
)]
pub struct NotDivisible;

/// The divisor is zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["", "", "this expression is zero"],
)]
pub struct DivisionByZero;

/// A coefficient or exponent grew too large.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "integer overflow",
    labels = ["", "this operation overflows", ""],
    help = format!("coefficients must be between {} and {}", -i64::MAX, i64::MAX),
)]
pub struct Overflow;

/// The expression could not be reduced to a single polynomial.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "could not simplify this expression",
    labels = ["this expression"],
)]
pub struct Unreduced;

/// Converts an [`ArithmeticError`] raised by an operator into an [`Error`] highlighting the given
/// spans.
pub fn from_arithmetic(err: ArithmeticError, spans: Vec<Range<usize>>) -> Error {
    match err {
        ArithmeticError::NotDivisible => Error::new(spans, NotDivisible),
        ArithmeticError::DivisionByZero => Error::new(spans, DivisionByZero),
        ArithmeticError::NegativeExponent => Error::new(spans, NegativeExponent),
        ArithmeticError::NonIntegerExponent => Error::new(spans, NonIntegerExponent),
        ArithmeticError::Overflow => Error::new(spans, Overflow),
    }
}
