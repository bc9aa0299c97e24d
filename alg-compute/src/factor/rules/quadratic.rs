use crate::{
    algebra::{Polynomial, Term},
    factor::FactoredPolynomial,
    step::{Factoring, Step},
    step_collector::StepCollector,
};

/// Returns the primitive part of `subject_coefficient - solution`, which is one linear factor of
/// the quadratic.
fn linear_factor(subject_coefficient: &Term, solution: &Term) -> Option<Polynomial> {
    Polynomial::new([subject_coefficient.clone(), solution.neg()])
        .ok()?
        .primitive_part()
        .ok()
}

/// `ax^2+bx+c = (2ax-p)(2ax-q)/4a`, where `p` and `q` are `-b±sqrt(b^2-4ac)`
///
/// Applies to a polynomial with two or three terms whose highest exponent is even. The polynomial
/// is treated as a quadratic in a "subject" term:
///
/// - With three terms, the subject is the greatest common factor of the first two terms, and
/// the middle term divided by the subject is `b`.
/// - With two terms, the subject is the square root of the first term, and `b` is zero.
///
/// The first term divided by the square of the subject is `a`, and the last term is `c`. The
/// discriminant `b^2-4ac` must be a perfect square. The result is only returned if multiplying it
/// back out gives the original polynomial.
pub fn quadratic(
    poly: &Polynomial,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<FactoredPolynomial> {
    let terms = poly.terms();
    if !(2..=3).contains(&terms.len()) || poly.highest_exponent() % 2 != 0 {
        return None;
    }

    let a_full = &terms[0];
    let c = &terms[terms.len() - 1];
    let (subject, b) = if terms.len() == 3 {
        let subject = Term::common_factor(&terms[..2]);
        let b = terms[1].div(&subject)?;
        (subject, b)
    } else {
        (a_full.root(2)?, Term::zero())
    };
    if subject.is_constant() {
        return None;
    }
    let a = a_full.div(&subject.pow(2)?)?;

    let discriminant = b.mul(&b)?.sub(&a.mul(c)?.mul(&Term::constant(4))?)?;
    if discriminant.coefficient() < 0 {
        log::trace!("quadratic: {} has a negative discriminant", poly);
        return None;
    }
    let root = discriminant.root(2)?;

    let subject_coefficient = subject.mul(&a)?.mul(&Term::constant(2))?;
    let first = linear_factor(&subject_coefficient, &b.neg().add(&root)?)?;
    let second = linear_factor(&subject_coefficient, &b.neg().sub(&root)?)?;

    let product = first.mul(&second).ok()?;
    let leading = a_full.div(product.leading_term()?)?;
    let output = FactoredPolynomial::new(leading, vec![first, second])?;
    if output.expand().ok()? != *poly {
        log::trace!("quadratic: {} does not expand to {}", output, poly);
        return None;
    }

    log::debug!("quadratic: {} = {}", poly, output);
    step_collector.push(Step::Quadratic(Factoring {
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
        quadratic(&s.parse().unwrap(), &mut ()).map(|f| f.to_string())
    }

    #[test]
    fn monic() {
        assert_eq!(factored("x^2+2x-3").as_deref(), Some("(x-1)(x+3)"));
        assert_eq!(factored("x^2+2x+1").as_deref(), Some("(x+1)(x+1)"));
    }

    #[test]
    fn leading_coefficient() {
        assert_eq!(factored("2x^2-3x+1").as_deref(), Some("(x-1)(2x-1)"));
        assert_eq!(factored("4x^2+10x+4").as_deref(), Some("2(2x+1)(x+2)"));
    }

    #[test]
    fn multivariate() {
        assert_eq!(factored("x^2-8xy+16y^2").as_deref(), Some("(x-4y)(x-4y)"));
        assert_eq!(factored("4x^4y^2-11x^2yz-3z^2").as_deref(), Some("(x^2y-3z)(4x^2y+z)"));
    }

    #[test]
    fn quadratic_in_a_power() {
        assert_eq!(factored("x^4+9x^2-10").as_deref(), Some("(x^2-1)(x^2+10)"));
    }

    #[test]
    fn declines() {
        assert_eq!(factored("x^2-2x+3"), None);
        assert_eq!(factored("x^2+4"), None);
        assert_eq!(factored("x^3+3x+2"), None);
        assert_eq!(factored("x^2+x+y"), None);
        assert_eq!(factored("3x^2-6x+9"), None);
        assert_eq!(factored("x^2"), None);
    }
}
