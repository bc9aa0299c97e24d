use crate::{
    algebra::{Polynomial, Term},
    factor::FactoredPolynomial,
    step::{Factoring, Step},
    step_collector::StepCollector,
};

/// `a^2-b^2 = (a-b)(a+b)`
///
/// Applies to a two-term polynomial whose terms have opposite signs and are both perfect
/// squares.
pub fn difference_of_squares(
    poly: &Polynomial,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<FactoredPolynomial> {
    let [first, second] = poly.terms() else {
        return None;
    };

    let (positive, negative) = match (first.coefficient() > 0, second.coefficient() > 0) {
        (true, false) => (first, second),
        (false, true) => (second, first),
        _ => return None,
    };

    // the root of the negative term keeps its sign: `-9x^2` => `-3x`
    let a = positive.root(2)?;
    let b = negative.root(2)?;
    let sum = Polynomial::new([a.clone(), b.clone()]).ok()?;
    let difference = Polynomial::new([a, b.neg()]).ok()?;

    let output = FactoredPolynomial::new(Term::one(), vec![sum, difference])?;
    log::debug!("difference of squares: {} = {}", poly, output);
    step_collector.push(Step::DifferenceOfSquares(Factoring {
        input: poly.clone(),
        output: output.clone(),
    }));
    Some(output)
}
