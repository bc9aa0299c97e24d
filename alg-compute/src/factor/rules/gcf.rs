use crate::{
    algebra::Polynomial,
    factor::FactoredPolynomial,
    step::{Factoring, Step},
    step_collector::StepCollector,
};

/// `ab+ac = a(b+c)`
///
/// Divides out the greatest common factor of all terms. Does not apply if the greatest common
/// factor is `1`.
pub fn greatest_common_factor(
    poly: &Polynomial,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<FactoredPolynomial> {
    let common = poly.common_factor();
    if common.is_one() {
        log::trace!("no common factor in {}", poly);
        return None;
    }

    let rest = poly.div_term(&common).ok()?;
    let output = FactoredPolynomial::new(common, vec![rest])?;
    log::debug!("greatest common factor: {} = {}", poly, output);
    step_collector.push(Step::GreatestCommonFactor(Factoring {
        input: poly.clone(),
        output: output.clone(),
    }));
    Some(output)
}
