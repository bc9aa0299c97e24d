use alg_parser::tokenizer::TokenKind;
use crate::{
    algebra::{ArithmeticError, Polynomial},
    step::{Reduction, Step},
};

/// A binary operator between two polynomials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl Operator {
    /// The operators reduced in each pass, from highest to lowest precedence. Operators within
    /// the same pass are reduced left to right.
    pub const PASSES: [&'static [Operator]; 3] = [
        &[Operator::Exp],
        &[Operator::Mul, Operator::Div],
        &[Operator::Add, Operator::Sub],
    ];

    /// Returns the operator corresponding to the given token kind, if it is one.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Exp => Some(Self::Exp),
            _ => None,
        }
    }

    /// Applies the operator to the given operands.
    ///
    /// The right operand of [`Operator::Exp`] must be a non-negative constant.
    pub fn apply(self, left: &Polynomial, right: &Polynomial) -> Result<Polynomial, ArithmeticError> {
        match self {
            Self::Add => left.add(right),
            Self::Sub => left.sub(right),
            Self::Mul => left.mul(right),
            Self::Div => left.div(right),
            Self::Exp => {
                let exponent = right.as_integer().ok_or(ArithmeticError::NonIntegerExponent)?;
                if exponent < 0 {
                    return Err(ArithmeticError::NegativeExponent);
                }
                let exponent = u32::try_from(exponent).map_err(|_| ArithmeticError::Overflow)?;
                left.pow(exponent)
            },
        }
    }

    /// Wraps a successful application of this operator in a [`Step`].
    pub fn step(self, reduction: Reduction) -> Step {
        match self {
            Self::Add => Step::Add(reduction),
            Self::Sub => Step::Subtract(reduction),
            Self::Mul => Step::Multiply(reduction),
            Self::Div => Step::Divide(reduction),
            Self::Exp => Step::Power(reduction),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn poly(s: &str) -> Polynomial {
        s.parse().unwrap()
    }

    #[test]
    fn power() {
        assert_eq!(Operator::Exp.apply(&poly("x+1"), &poly("2")), Ok(poly("x^2+2x+1")));
        assert_eq!(Operator::Exp.apply(&poly("10"), &poly("2")), Ok(poly("100")));
        assert_eq!(Operator::Exp.apply(&poly("x"), &poly("0")), Ok(poly("1")));
    }

    #[test]
    fn invalid_exponents() {
        assert_eq!(Operator::Exp.apply(&poly("2"), &poly("x")), Err(ArithmeticError::NonIntegerExponent));
        assert_eq!(Operator::Exp.apply(&poly("2"), &poly("-1")), Err(ArithmeticError::NegativeExponent));
        assert_eq!(
            Operator::Exp.apply(&poly("1"), &poly("9999999999")),
            Err(ArithmeticError::Overflow),
        );
    }

    #[test]
    fn divide() {
        assert_eq!(Operator::Div.apply(&poly("6x^2+3x"), &poly("3x")), Ok(poly("2x+1")));
        assert_eq!(Operator::Div.apply(&poly("x"), &poly("0")), Err(ArithmeticError::DivisionByZero));
    }
}
