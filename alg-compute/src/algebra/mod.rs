//! Exact integer polynomial arithmetic.
//!
//! A [`Polynomial`] is a sum of [`Term`]s, and a [`Term`] is an integer coefficient multiplied by
//! a product of [`Variable`]s. Every value is kept in canonical form: like terms are combined,
//! zero terms are removed, and terms are sorted in lexicographic order (see the [`Ord`]
//! implementation of [`Term`]). This makes two polynomials equal exactly when their canonical
//! forms are equal.
//!
//! All arithmetic is exact and checked; nothing here ever produces a fraction or a float.

pub mod polynomial;
pub mod term;
pub mod variable;

use std::fmt;

pub use polynomial::Polynomial;
pub use term::{ParseTermError, Term};
pub use variable::Variable;

/// Rejects [`i64::MIN`] as a coefficient, so that negating any stored coefficient cannot
/// overflow.
pub(crate) fn checked(value: Option<i64>) -> Option<i64> {
    value.filter(|&n| n != i64::MIN)
}

/// An arithmetic operation on polynomials that cannot be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The divisor is not a single term, or it does not divide every term of the dividend.
    NotDivisible,

    /// The divisor is zero.
    DivisionByZero,

    /// The exponent is negative.
    NegativeExponent,

    /// The exponent is not a constant integer.
    NonIntegerExponent,

    /// A coefficient or exponent does not fit in a machine integer.
    Overflow,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDivisible => write!(f, "the division does not produce a polynomial"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::NegativeExponent => write!(f, "negative exponents are not supported"),
            Self::NonIntegerExponent => write!(f, "the exponent must be a constant integer"),
            Self::Overflow => write!(f, "the result is too large"),
        }
    }
}

impl std::error::Error for ArithmeticError {}
