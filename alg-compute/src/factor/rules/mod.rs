//! Factoring strategies.
//!
//! Each strategy in this module is a function that takes the polynomial to factor as an argument,
//! and returns `Some(factored)` with the result of factoring it once if the strategy applies, or
//! `None` if it does not. The factors returned by a strategy are not factored any further.

pub mod cubes;
pub mod gcf;
pub mod quadratic;
pub mod squares;

use crate::{algebra::Polynomial, step::Step, step_collector::StepCollector};
use super::FactoredPolynomial;

/// Applies the first strategy that succeeds, trying them from the most specific to the most
/// general.
pub fn all(poly: &Polynomial, step_collector: &mut dyn StepCollector<Step>) -> Option<FactoredPolynomial> {
    squares::difference_of_squares(poly, step_collector)
        .or_else(|| cubes::sum_of_cubes(poly, step_collector))
        .or_else(|| quadratic::quadratic(poly, step_collector))
        .or_else(|| gcf::greatest_common_factor(poly, step_collector))
}
