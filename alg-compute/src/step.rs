use crate::{algebra::Polynomial, factor::FactoredPolynomial};
use std::fmt;

/// An operator applied to two polynomials during simplification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// The left operand.
    pub left: Polynomial,

    /// The right operand.
    pub right: Polynomial,

    /// The polynomial the operands were combined into.
    pub result: Polynomial,
}

/// A factoring strategy applied to a polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factoring {
    /// The polynomial that was factored.
    pub input: Polynomial,

    /// The result of applying the strategy once.
    pub output: FactoredPolynomial,
}

/// A step taken while simplifying or factoring an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The contents of the innermost pair of parentheses were reduced to a single polynomial.
    EvaluateParentheses(Polynomial),

    /// `a^n`
    Power(Reduction),

    /// `a*b`
    Multiply(Reduction),

    /// `a/b`
    Divide(Reduction),

    /// `a+b`
    Add(Reduction),

    /// `a-b`
    Subtract(Reduction),

    /// `ab+ac = a(b+c)`
    GreatestCommonFactor(Factoring),

    /// `a^2-b^2 = (a-b)(a+b)`
    DifferenceOfSquares(Factoring),

    /// `a^3+b^3 = (a+b)(a^2-ab+b^2)`
    SumOfCubes(Factoring),

    /// `ax^2+bx+c = a(x-p)(x-q)`
    Quadratic(Factoring),
}

impl Reduction {
    fn fmt_named(&self, f: &mut fmt::Formatter<'_>, name: &str, symbol: &str) -> fmt::Result {
        write!(f, "{}: ({}){}({}) = {}", name, self.left, symbol, self.right, self.result)
    }
}

impl Factoring {
    fn fmt_named(&self, f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
        write!(f, "{}: {} = {}", name, self.input, self.output)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvaluateParentheses(result) => write!(f, "evaluate parentheses: ({})", result),
            Self::Power(r) => r.fmt_named(f, "power", "^"),
            Self::Multiply(r) => r.fmt_named(f, "multiply", "*"),
            Self::Divide(r) => r.fmt_named(f, "divide", "/"),
            Self::Add(r) => r.fmt_named(f, "add", "+"),
            Self::Subtract(r) => r.fmt_named(f, "subtract", "-"),
            Self::GreatestCommonFactor(fac) => fac.fmt_named(f, "greatest common factor"),
            Self::DifferenceOfSquares(fac) => fac.fmt_named(f, "difference of squares"),
            Self::SumOfCubes(fac) => fac.fmt_named(f, "sum of cubes"),
            Self::Quadratic(fac) => fac.fmt_named(f, "quadratic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn display_reduction() {
        let step = Step::Multiply(Reduction {
            left: "x+1".parse().unwrap(),
            right: "x-1".parse().unwrap(),
            result: "x^2-1".parse().unwrap(),
        });
        assert_eq!(step.to_string(), "multiply: (x+1)*(x-1) = x^2-1");
    }

    #[test]
    fn display_factoring() {
        let input: Polynomial = "2x+4".parse().unwrap();
        let step = Step::GreatestCommonFactor(Factoring {
            output: FactoredPolynomial::new("2".parse().unwrap(), vec!["x+2".parse().unwrap()]).unwrap(),
            input,
        });
        assert_eq!(step.to_string(), "greatest common factor: 2x+4 = 2(x+2)");
    }
}
