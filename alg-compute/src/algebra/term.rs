use num::integer::{gcd, Roots};
use std::{cmp::Ordering, fmt, str::FromStr};
use super::{checked, variable::Variable};

/// An integer coefficient multiplied by a product of variables with distinct symbols, such as
/// `4x^2y` or `-7`.
///
/// # Invariants
///
/// - There is at most one [`Variable`] per symbol, and none with a zero exponent. Variables with
/// the same symbol are combined on construction by adding their exponents.
/// - Variables are sorted by symbol.
/// - The zero term has no variables.
/// - The coefficient is never [`i64::MIN`], so negating a term cannot overflow.
///
/// Arithmetic that may not be applicable, such as adding terms with different variables, returns
/// [`None`] instead of failing. Every operation also returns [`None`] if the coefficient or an
/// exponent would overflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    coefficient: i64,
    variables: Vec<Variable>,
}

impl Term {
    /// Creates a new term, combining variables with the same symbol and removing variables with
    /// an exponent of zero.
    ///
    /// Returns [`None`] if the coefficient is [`i64::MIN`] or an exponent overflows.
    pub fn new(coefficient: i64, variables: impl IntoIterator<Item = Variable>) -> Option<Self> {
        let coefficient = checked(Some(coefficient))?;
        if coefficient == 0 {
            return Some(Self::zero());
        }

        let mut merged: Vec<Variable> = Vec::new();
        for variable in variables {
            match merged.iter_mut().find(|v| v.symbol() == variable.symbol()) {
                Some(existing) => {
                    let exponent = existing.exponent().checked_add(variable.exponent())?;
                    *existing = existing.with_exponent(exponent);
                },
                None => merged.push(variable),
            }
        }
        merged.retain(|v| v.exponent() != 0);
        merged.sort();

        Some(Self { coefficient, variables: merged })
    }

    /// Creates a constant term.
    ///
    /// # Panics
    ///
    /// Panics if the constant is [`i64::MIN`].
    pub fn constant(coefficient: i64) -> Self {
        assert_ne!(coefficient, i64::MIN, "coefficient out of range");
        if coefficient == 0 {
            Self::zero()
        } else {
            Self { coefficient, variables: Vec::new() }
        }
    }

    /// Creates the term `symbol^exponent`.
    ///
    /// # Panics
    ///
    /// Panics if the symbol is not a lowercase ASCII letter.
    pub fn variable(symbol: char, exponent: i32) -> Self {
        let variables = if exponent == 0 {
            Vec::new()
        } else {
            vec![Variable::new(symbol, exponent)]
        };
        Self { coefficient: 1, variables }
    }

    /// The zero term.
    pub fn zero() -> Self {
        Self { coefficient: 0, variables: Vec::new() }
    }

    /// The constant term `1`.
    pub fn one() -> Self {
        Self { coefficient: 1, variables: Vec::new() }
    }

    /// Returns the coefficient of the term.
    pub fn coefficient(&self) -> i64 {
        self.coefficient
    }

    /// Returns the variables of the term, sorted by symbol.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Returns the exponent of the variable with the given symbol, or zero if the term does not
    /// contain the variable.
    pub fn exponent_of(&self, symbol: char) -> i32 {
        self.variables
            .iter()
            .find(|v| v.symbol() == symbol)
            .map_or(0, Variable::exponent)
    }

    /// Returns true if this is the zero term.
    pub fn is_zero(&self) -> bool {
        self.coefficient == 0
    }

    /// Returns true if this is the constant term `1`.
    pub fn is_one(&self) -> bool {
        self.coefficient == 1 && self.variables.is_empty()
    }

    /// Returns true if the term has no variables.
    pub fn is_constant(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns the largest exponent of any variable in the term, or zero for a constant.
    pub fn highest_exponent(&self) -> i32 {
        self.variables.iter().map(Variable::exponent).max().unwrap_or(0)
    }

    /// Returns true if both terms have exactly the same variables and exponents, i.e. they are
    /// like terms that can be added together.
    pub fn same_signature(&self, other: &Self) -> bool {
        self.variables == other.variables
    }

    /// Returns the negation of the term.
    pub fn neg(&self) -> Self {
        Self { coefficient: -self.coefficient, variables: self.variables.clone() }
    }

    /// Multiplies two terms: coefficients are multiplied and exponents of shared variables are
    /// added.
    pub fn mul(&self, other: &Self) -> Option<Self> {
        let coefficient = checked(self.coefficient.checked_mul(other.coefficient))?;
        Self::new(
            coefficient,
            self.variables.iter().chain(other.variables.iter()).copied(),
        )
    }

    /// Divides this term by the given divisor.
    ///
    /// Returns [`None`] unless the divisor's coefficient divides this term's coefficient evenly,
    /// and every variable of the divisor appears in this term with at least the same exponent.
    pub fn div(&self, divisor: &Self) -> Option<Self> {
        if divisor.is_zero() {
            return None;
        }
        if self.is_zero() {
            return Some(Self::zero());
        }
        if self.coefficient % divisor.coefficient != 0 {
            return None;
        }

        for variable in &divisor.variables {
            if self.exponent_of(variable.symbol()) < variable.exponent() {
                return None;
            }
        }

        let variables = self.variables.iter().map(|variable| {
            variable.with_exponent(variable.exponent() - divisor.exponent_of(variable.symbol()))
        });
        Self::new(self.coefficient / divisor.coefficient, variables)
    }

    /// Adds two like terms. The zero term can be added to any term.
    ///
    /// Returns [`None`] if the terms have different variables.
    pub fn add(&self, other: &Self) -> Option<Self> {
        if self.is_zero() {
            return Some(other.clone());
        }
        if other.is_zero() {
            return Some(self.clone());
        }
        if !self.same_signature(other) {
            return None;
        }

        let coefficient = checked(self.coefficient.checked_add(other.coefficient))?;
        if coefficient == 0 {
            Some(Self::zero())
        } else {
            Some(Self { coefficient, variables: self.variables.clone() })
        }
    }

    /// Subtracts two like terms.
    ///
    /// Returns [`None`] if the terms have different variables.
    pub fn sub(&self, other: &Self) -> Option<Self> {
        self.add(&other.neg())
    }

    /// Raises the term to a non-negative integer power: the coefficient is raised to the power
    /// and every exponent is multiplied by it.
    pub fn pow(&self, power: u32) -> Option<Self> {
        let coefficient = checked(self.coefficient.checked_pow(power))?;
        let multiplier = i32::try_from(power).ok()?;
        let variables = self.variables
            .iter()
            .map(|v| Some(v.with_exponent(v.exponent().checked_mul(multiplier)?)))
            .collect::<Option<Vec<_>>>()?;
        Self::new(coefficient, variables)
    }

    /// Takes the integer root of the given degree.
    ///
    /// Succeeds only if the absolute value of the coefficient is a perfect power of that degree,
    /// and every exponent is divisible by the degree. The sign of the coefficient is kept, so the
    /// square root of `-4x^2` is `-2x`.
    pub fn root(&self, degree: u32) -> Option<Self> {
        if degree == 0 {
            return None;
        }

        let magnitude = self.coefficient.unsigned_abs();
        let root = magnitude.nth_root(degree);
        if root.checked_pow(degree) != Some(magnitude) {
            return None;
        }

        let divisor = i32::try_from(degree).ok()?;
        if self.variables.iter().any(|v| v.exponent() % divisor != 0) {
            return None;
        }

        let root = i64::try_from(root).ok()? * self.coefficient.signum();
        Self::new(root, self.variables.iter().map(|v| v.with_exponent(v.exponent() / divisor)))
    }

    /// Returns the greatest common factor of the given terms.
    ///
    /// The coefficient is the greatest common divisor of the coefficients (always positive), and
    /// each variable that appears in every term is included with its smallest exponent.
    pub fn common_factor(terms: &[Self]) -> Self {
        let Some(first) = terms.first() else {
            return Self::one();
        };

        let coefficient = match terms.iter().fold(0, |acc, term| gcd(acc, term.coefficient)) {
            0 => 1,
            n => n,
        };

        let variables = first.variables
            .iter()
            .filter_map(|variable| {
                terms.iter()
                    .map(|term| term.exponent_of(variable.symbol()))
                    .min()
                    .filter(|&exponent| exponent > 0)
                    .map(|exponent| variable.with_exponent(exponent))
            })
            .collect();

        Self { coefficient, variables }
    }
}

/// Terms are ordered lexicographically: the first symbol (in alphabetical order) at which the
/// exponents of two terms differ decides the order, with the higher exponent first. A missing
/// variable counts as an exponent of zero, so constants come last. Like terms are ordered by
/// descending coefficient.
///
/// `a^3 < a^2b < a^2c < ab^2 < b^3 < c < 5`
impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = (&self.variables, &other.variables);
        let (mut i, mut j) = (0, 0);

        loop {
            let ordering = match (lhs.get(i), rhs.get(j)) {
                (None, None) => break,
                (Some(l), Some(r)) if l.symbol() == r.symbol() => {
                    i += 1;
                    j += 1;
                    r.exponent().cmp(&l.exponent())
                },
                (Some(l), Some(r)) if l.symbol() < r.symbol() => {
                    i += 1;
                    0.cmp(&l.exponent())
                },
                (Some(l), None) => {
                    i += 1;
                    0.cmp(&l.exponent())
                },
                (_, Some(r)) => {
                    j += 1;
                    r.exponent().cmp(&0)
                },
            };

            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        other.coefficient.cmp(&self.coefficient)
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.coefficient, self.variables.is_empty()) {
            (coefficient, true) => write!(f, "{}", coefficient)?,
            (1, false) => (),
            (-1, false) => write!(f, "-")?,
            (coefficient, false) => write!(f, "{}", coefficient)?,
        }

        for variable in &self.variables {
            write!(f, "{}", variable)?;
        }

        Ok(())
    }
}

/// An error encountered while parsing a term literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseTermError {
    /// The literal has neither a coefficient nor any variables.
    Empty,

    /// A character that cannot appear in a term literal was found.
    UnexpectedCharacter(char),

    /// A `^` was not followed by an exponent.
    MissingExponent,

    /// The coefficient or an exponent does not fit in a machine integer.
    Overflow,
}

impl fmt::Display for ParseTermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "a term needs a coefficient or a variable"),
            Self::UnexpectedCharacter(c) => write!(f, "unexpected character `{}` in term", c),
            Self::MissingExponent => write!(f, "`^` must be followed by an exponent"),
            Self::Overflow => write!(f, "number too large"),
        }
    }
}

impl std::error::Error for ParseTermError {}

/// Parses a term literal of the form `-?[0-9]*([a-z](\^[0-9]+)?)*`, such as `-12x^2y`.
impl FromStr for Term {
    type Err = ParseTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let (digits, rest) = rest.split_at(digits_end);

        let mut variables = Vec::new();
        let mut chars = rest.chars().peekable();
        while let Some(symbol) = chars.next() {
            if !symbol.is_ascii_lowercase() {
                return Err(ParseTermError::UnexpectedCharacter(symbol));
            }

            let mut exponent = 1;
            if chars.next_if_eq(&'^').is_some() {
                let mut exponent_digits = String::new();
                while let Some(digit) = chars.next_if(char::is_ascii_digit) {
                    exponent_digits.push(digit);
                }
                if exponent_digits.is_empty() {
                    return Err(ParseTermError::MissingExponent);
                }
                exponent = exponent_digits.parse::<i32>().map_err(|_| ParseTermError::Overflow)?;
            }

            variables.push(Variable::new(symbol, exponent));
        }

        if digits.is_empty() && variables.is_empty() {
            return Err(ParseTermError::Empty);
        }

        let magnitude = if digits.is_empty() {
            1
        } else {
            digits.parse::<i64>().map_err(|_| ParseTermError::Overflow)?
        };
        let coefficient = if negative { -magnitude } else { magnitude };

        Self::new(coefficient, variables).ok_or(ParseTermError::Overflow)
    }
}
