//! Simplification and factoring of polynomial expressions with integer coefficients.
//!
//! An expression such as `2(x+4(x^2-3)(2x+1))-4` is parsed by [`alg_parser`], reduced to a
//! canonical [`Polynomial`](algebra::Polynomial) by [`simplify()`], and then factored into a
//! [`FactoredPolynomial`](factor::FactoredPolynomial) by [`factor::factor`].
//!
//! ```
//! use alg_compute::simplify_and_factor;
//!
//! let result = simplify_and_factor("(x^2-1)(x+3)-(x^2-1)(x-3)").unwrap();
//! assert_eq!(result.to_string(), "6(x-1)(x+1)");
//! ```
//!
//! Both stages can report the steps they take through a [`StepCollector`]; see
//! [`simplify_with_steps`] and [`simplify_and_factor_with_steps`].

pub mod algebra;
pub mod error;
pub mod factor;
pub mod simplify;
pub mod step;
pub mod step_collector;

pub use alg_parser::input::{is_valid_input, strip_whitespace};
pub use error::Error;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step::Step;
pub use step_collector::StepCollector;

use factor::FactoredPolynomial;

/// Simplifies the given expression, then factors the result.
///
/// Whitespace is removed before parsing, so the spans of any returned error refer to the input
/// with whitespace removed (see [`strip_whitespace`]).
pub fn simplify_and_factor(input: &str) -> Result<FactoredPolynomial, Error> {
    let simplified = simplify(input)?;
    Ok(factor::factor(&simplified))
}

/// Simplifies the given expression, then factors the result, collecting the steps of both
/// stages.
pub fn simplify_and_factor_with_steps(input: &str) -> Result<(FactoredPolynomial, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let simplified = simplify_with(input, &mut steps)?;
    let factored = factor::factor_with(&simplified, &mut steps);
    Ok((factored, steps))
}
