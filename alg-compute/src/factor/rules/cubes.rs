use crate::{
    algebra::{Polynomial, Term},
    factor::FactoredPolynomial,
    step::{Factoring, Step},
    step_collector::StepCollector,
};

/// `a^3+b^3 = (a+b)(a^2-ab+b^2)`
///
/// Applies to a two-term polynomial whose terms are both perfect cubes. The roots keep the sign
/// of their terms, so this covers the difference of cubes as well: `x^3-8 = (x-2)(x^2+2x+4)`.
pub fn sum_of_cubes(
    poly: &Polynomial,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<FactoredPolynomial> {
    let [first, second] = poly.terms() else {
        return None;
    };

    let a = first.root(3)?;
    let b = second.root(3)?;
    let linear = Polynomial::new([a.clone(), b.clone()]).ok()?;
    let quadratic = Polynomial::new([a.pow(2)?, a.mul(&b)?.neg(), b.pow(2)?]).ok()?;

    let output = FactoredPolynomial::new(Term::one(), vec![linear, quadratic])?;
    log::debug!("sum of cubes: {} = {}", poly, output);
    step_collector.push(Step::SumOfCubes(Factoring {
        input: poly.clone(),
        output: output.clone(),
    }));
    Some(output)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn factored(s: &str) -> Option<String> {
        sum_of_cubes(&s.parse().unwrap(), &mut ()).map(|f| f.to_string())
    }

    #[test]
    fn applies() {
        assert_eq!(factored("x^3+1").as_deref(), Some("(x+1)(x^2-x+1)"));
        assert_eq!(factored("x^3-8").as_deref(), Some("(x-2)(x^2+2x+4)"));
        assert_eq!(factored("8a^3+27b^6").as_deref(), Some("(2a+3b^2)(4a^2-6ab^2+9b^4)"));
    }

    #[test]
    fn declines() {
        assert_eq!(factored("x^3+2"), None);
        assert_eq!(factored("x^2+1"), None);
        assert_eq!(factored("x^3+x+1"), None);
    }
}
