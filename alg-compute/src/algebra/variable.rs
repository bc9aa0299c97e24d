use std::fmt;

/// A single variable raised to an integer power, such as `x` or `y^3`.
///
/// Variables are ordered by symbol, then by exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable {
    symbol: char,
    exponent: i32,
}

impl Variable {
    /// Creates a new variable.
    ///
    /// # Panics
    ///
    /// Panics if the symbol is not a lowercase ASCII letter. Input is validated before it reaches
    /// this point, so an invalid symbol here is a bug in the caller.
    pub fn new(symbol: char, exponent: i32) -> Self {
        assert!(symbol.is_ascii_lowercase(), "variable symbol must be a lowercase letter, got `{}`", symbol);
        Self { symbol, exponent }
    }

    /// Returns the symbol of the variable.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Returns the exponent of the variable.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Returns the same variable with a different exponent.
    pub fn with_exponent(self, exponent: i32) -> Self {
        Self { exponent, ..self }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 1 {
            write!(f, "{}", self.symbol)
        } else {
            write!(f, "{}^{}", self.symbol, self.exponent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Variable::new('x', 1).to_string(), "x");
        assert_eq!(Variable::new('y', 3).to_string(), "y^3");
    }

    #[test]
    fn ordering() {
        assert!(Variable::new('a', 5) < Variable::new('b', 1));
        assert!(Variable::new('x', 1) < Variable::new('x', 2));
    }

    #[test]
    #[should_panic]
    fn uppercase_symbol() {
        Variable::new('X', 1);
    }
}
