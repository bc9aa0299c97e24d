use crate::algebra::{ArithmeticError, Polynomial, Term};
use std::fmt;

/// A polynomial written as a leading [`Term`] multiplied by a list of [`Polynomial`] factors,
/// such as `5y^2(x-3y)(x+3y)`.
///
/// Factors are kept in a normalized form: no factor is a single term (single terms are
/// multiplied into the leading term), and the first term of every factor is positive (the sign
/// is moved into the leading term instead). A zero leading term has no factors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoredPolynomial {
    leading: Term,
    factors: Vec<Polynomial>,
}

impl FactoredPolynomial {
    /// Creates a factored polynomial from a leading term and a list of factors, normalizing the
    /// factors.
    ///
    /// Returns [`None`] if multiplying single-term factors into the leading term overflows.
    pub fn new(leading: Term, factors: Vec<Polynomial>) -> Option<Self> {
        let mut result = Self::from_term(leading);
        for factor in factors {
            result.add_factor(factor)?;
        }
        Some(result)
    }

    /// Creates a factored polynomial with no factors.
    pub fn from_term(leading: Term) -> Self {
        Self { leading, factors: Vec::new() }
    }

    /// Wraps the polynomial without factoring it.
    pub fn unfactored(polynomial: Polynomial) -> Self {
        match polynomial.terms() {
            [] => Self::from_term(Term::zero()),
            [term] => Self::from_term(term.clone()),
            [first, ..] if first.coefficient() < 0 => Self {
                leading: Term::constant(-1),
                factors: vec![polynomial.neg()],
            },
            _ => Self { leading: Term::one(), factors: vec![polynomial] },
        }
    }

    /// Multiplies the given factor into this factored polynomial.
    ///
    /// Returns [`None`] if the leading term overflows.
    pub fn add_factor(&mut self, factor: Polynomial) -> Option<()> {
        if self.leading.is_zero() {
            return Some(());
        }

        match factor.terms() {
            [] => {
                self.leading = Term::zero();
                self.factors.clear();
            },
            [term] => self.leading = self.leading.mul(term)?,
            [first, ..] if first.coefficient() < 0 => {
                self.leading = self.leading.neg();
                self.factors.push(factor.neg());
            },
            _ => self.factors.push(factor),
        }

        Some(())
    }

    /// Returns the leading term.
    pub fn leading_term(&self) -> &Term {
        &self.leading
    }

    /// Returns the factors, not including the leading term.
    pub fn factors(&self) -> &[Polynomial] {
        &self.factors
    }

    /// Multiplies two factored polynomials: the leading terms are multiplied and the factor
    /// lists are joined.
    pub fn mul(&self, other: &Self) -> Option<Self> {
        let leading = self.leading.mul(&other.leading)?;
        let factors = self.factors.iter().chain(other.factors.iter()).cloned().collect();
        Self::new(leading, factors)
    }

    /// Multiplies out the leading term and every factor into a single [`Polynomial`].
    pub fn expand(&self) -> Result<Polynomial, ArithmeticError> {
        self.factors
            .iter()
            .try_fold(Polynomial::from_term(self.leading.clone()), |product, factor| product.mul(factor))
    }
}

impl fmt::Display for FactoredPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.factors.is_empty() {
            return write!(f, "{}", self.leading);
        }

        if self.leading.is_one() {
            if let [factor] = self.factors.as_slice() {
                return write!(f, "{}", factor);
            }
        } else if self.leading.is_constant() && self.leading.coefficient() == -1 {
            write!(f, "-")?;
        } else {
            write!(f, "{}", self.leading)?;
        }

        for factor in &self.factors {
            write!(f, "({})", factor)?;
        }

        Ok(())
    }
}
