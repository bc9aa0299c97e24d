//! Factoring of polynomials over the integers.
//!
//! A polynomial is factored by applying the first strategy in [`rules`] that applies to it, then
//! factoring each of the resulting factors the same way, until no strategy applies to any
//! factor. The leading terms of the partial results are multiplied together and their factor
//! lists are joined.
//!
//! ```
//! use alg_compute::{algebra::Polynomial, factor::factor};
//!
//! let poly: Polynomial = "6x^4-96".parse().unwrap();
//! assert_eq!(factor(&poly).to_string(), "6(x-2)(x+2)(x^2+4)");
//! ```

mod factored;
pub mod rules;

use crate::{algebra::Polynomial, step::Step, step_collector::StepCollector};

pub use factored::FactoredPolynomial;

/// Factors the polynomial as far as possible.
pub fn factor(poly: &Polynomial) -> FactoredPolynomial {
    factor_with(poly, &mut ())
}

/// Factors the polynomial as far as possible, collecting the steps taken.
pub fn factor_with_steps(poly: &Polynomial) -> (FactoredPolynomial, Vec<Step>) {
    let mut steps = Vec::new();
    let result = factor_with(poly, &mut steps);
    (result, steps)
}

/// Factors the polynomial as far as possible, reporting each strategy applied to the given
/// [`StepCollector`].
pub fn factor_with(poly: &Polynomial, step_collector: &mut dyn StepCollector<Step>) -> FactoredPolynomial {
    let unfactored = FactoredPolynomial::unfactored(poly.clone());
    if poly.len() < 2 {
        return unfactored;
    }

    let Some(once) = rules::all(poly, step_collector) else {
        return unfactored;
    };
    if once == unfactored {
        return unfactored;
    }

    let mut result = FactoredPolynomial::from_term(once.leading_term().clone());
    for factor in once.factors() {
        let factored = if factor == poly {
            FactoredPolynomial::unfactored(factor.clone())
        } else {
            factor_with(factor, step_collector)
        };

        match result.mul(&factored) {
            Some(product) => result = product,
            None => {
                log::warn!("overflow while combining the factors of {}", poly);
                return unfactored;
            },
        }
    }

    result
}
