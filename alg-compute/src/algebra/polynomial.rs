use std::{collections::BTreeMap, fmt, str::FromStr};
use super::{checked, term::{ParseTermError, Term}, variable::Variable, ArithmeticError};

/// A sum of [`Term`]s in canonical form.
///
/// Like terms are always combined, zero terms are dropped, and the remaining terms are sorted
/// in lexicographic order. The zero polynomial has no terms at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates a polynomial from the given terms, combining like terms.
    ///
    /// Returns [`ArithmeticError::Overflow`] if combining like terms overflows.
    pub fn new(terms: impl IntoIterator<Item = Term>) -> Result<Self, ArithmeticError> {
        let mut coefficients: BTreeMap<Vec<Variable>, i64> = BTreeMap::new();
        for term in terms {
            if term.is_zero() {
                continue;
            }

            let coefficient = coefficients.entry(term.variables().to_vec()).or_insert(0);
            *coefficient = checked(coefficient.checked_add(term.coefficient()))
                .ok_or(ArithmeticError::Overflow)?;
        }

        let mut combined = coefficients
            .into_iter()
            .filter(|(_, coefficient)| *coefficient != 0)
            .map(|(variables, coefficient)| Term::new(coefficient, variables).ok_or(ArithmeticError::Overflow))
            .collect::<Result<Vec<_>, _>>()?;
        combined.sort();
        Ok(Self { terms: combined })
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates a polynomial consisting of a single term.
    pub fn from_term(term: Term) -> Self {
        if term.is_zero() {
            Self::zero()
        } else {
            Self { terms: vec![term] }
        }
    }

    /// Creates a constant polynomial.
    pub fn constant(value: i64) -> Self {
        Self::from_term(Term::constant(value))
    }

    /// Returns the terms of the polynomial, in lexicographic order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the first term in lexicographic order, or [`None`] for the zero polynomial.
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Returns true if the polynomial is exactly one term.
    pub fn is_monomial(&self) -> bool {
        self.terms.len() == 1
    }

    /// If the polynomial is a constant, returns its value.
    pub fn as_integer(&self) -> Option<i64> {
        match self.terms.as_slice() {
            [] => Some(0),
            [term] if term.is_constant() => Some(term.coefficient()),
            _ => None,
        }
    }

    /// Returns the largest exponent of any variable in any term.
    pub fn highest_exponent(&self) -> i32 {
        self.terms.iter().map(Term::highest_exponent).max().unwrap_or(0)
    }

    /// Returns the negation of the polynomial.
    pub fn neg(&self) -> Self {
        Self { terms: self.terms.iter().map(Term::neg).collect() }
    }

    /// Adds two polynomials.
    pub fn add(&self, other: &Self) -> Result<Self, ArithmeticError> {
        Self::new(self.terms.iter().chain(other.terms.iter()).cloned())
    }

    /// Subtracts `other` from this polynomial.
    pub fn sub(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials by multiplying every pair of terms.
    pub fn mul(&self, other: &Self) -> Result<Self, ArithmeticError> {
        let mut products = Vec::with_capacity(self.terms.len() * other.terms.len());
        for lhs in &self.terms {
            for rhs in &other.terms {
                products.push(lhs.mul(rhs).ok_or(ArithmeticError::Overflow)?);
            }
        }
        Self::new(products)
    }

    /// Divides every term of the polynomial by the given term.
    pub fn div_term(&self, divisor: &Term) -> Result<Self, ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let quotients = self.terms
            .iter()
            .map(|term| term.div(divisor).ok_or(ArithmeticError::NotDivisible))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(quotients)
    }

    /// Divides this polynomial by another.
    ///
    /// Only division by a single term is supported, and it must divide every term exactly.
    pub fn div(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        match divisor.terms.as_slice() {
            [] => Err(ArithmeticError::DivisionByZero),
            [term] => self.div_term(term),
            _ => Err(ArithmeticError::NotDivisible),
        }
    }

    /// Raises the polynomial to a non-negative integer power by repeated squaring. Any
    /// polynomial raised to the power of zero is `1`.
    pub fn pow(&self, exponent: u32) -> Result<Self, ArithmeticError> {
        let mut result = Self::constant(1);
        let mut base = self.clone();
        let mut exponent = exponent;

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.mul(&base)?;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.mul(&base)?;
            }
        }

        Ok(result)
    }

    /// Returns the greatest common factor of all terms (see [`Term::common_factor`]). The zero
    /// polynomial has a common factor of `1`.
    pub fn common_factor(&self) -> Term {
        Term::common_factor(&self.terms)
    }

    /// Divides the polynomial by its greatest common factor.
    pub fn primitive_part(&self) -> Result<Self, ArithmeticError> {
        self.div_term(&self.common_factor())
    }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Self {
        Self::from_term(term)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 && term.coefficient() > 0 {
                write!(f, "+")?;
            }
            write!(f, "{}", term)?;
        }

        Ok(())
    }
}

/// Parses a polynomial written as a sum of term literals, such as `x^2-2xy+3`.
impl FromStr for Polynomial {
    type Err = ParseTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn literal(s: &str) -> Result<Term, ParseTermError> {
            s.strip_prefix('+').unwrap_or(s).parse()
        }

        let mut terms = Vec::new();
        let mut start = 0;
        for (i, c) in s.char_indices() {
            if i > start && (c == '+' || c == '-') {
                terms.push(literal(&s[start..i])?);
                start = i;
            }
        }
        terms.push(literal(&s[start..])?);

        Self::new(terms).map_err(|_| ParseTermError::Overflow)
    }
}
