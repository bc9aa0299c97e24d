//! Reduction of an expression to a single canonical [`Polynomial`].
//!
//! The expression is first parsed into a flat token stream by [`alg_parser`], then every term
//! literal is converted to a [`Polynomial`]. The stream is reduced in place:
//!
//! 1. The innermost pair of parentheses is found (see [`deepest_parentheses`]).
//! 2. Its contents are reduced to a single polynomial in three precedence passes: `^`, then `*`
//!    and `/`, then `+` and `-`. Each pass scans left to right. When an operator can be applied,
//!    the operator and its two operands are replaced by the result, and the scan continues at the
//!    same position so that the newly adjacent operator is checked next.
//! 3. The parentheses and their contents are replaced by the resulting polynomial.
//!
//! This repeats until no parentheses remain, after which the whole stream is reduced once more.
//!
//! An operator that cannot be applied, such as `x^y` or `x/2`, is skipped. If any operator is
//! left over after all passes, the failure of the first skipped operator is reported.

mod operator;

use alg_parser::{input::strip_whitespace, parser::parse, tokenizer::{Token, TokenKind}};
use crate::{
    algebra::{Polynomial, Term},
    error::{self, Error, InvalidLiteral, Unreduced},
    step::{Reduction, Step},
    step_collector::StepCollector,
};
use std::ops::Range;

pub use operator::Operator;

/// An element of the token stream being reduced.
#[derive(Debug, Clone, PartialEq)]
enum Item {
    Operand(Polynomial, Range<usize>),
    Operator(Operator, Range<usize>),
    Open(Range<usize>),
    Close(Range<usize>),
}

impl Item {
    fn span(&self) -> Range<usize> {
        match self {
            Self::Operand(_, span) | Self::Operator(_, span) | Self::Open(span) | Self::Close(span) => {
                span.clone()
            },
        }
    }
}

/// Converts validated tokens into [`Item`]s, parsing every term literal.
fn to_items(tokens: &[Token]) -> Result<Vec<Item>, Error> {
    tokens
        .iter()
        .map(|token| {
            let span = token.span.clone();
            match token.kind {
                TokenKind::Term => token.lexeme
                    .parse::<Term>()
                    .map(|term| Item::Operand(Polynomial::from_term(term), span.clone()))
                    .map_err(|reason| Error::new(vec![span], InvalidLiteral { reason })),
                TokenKind::OpenParen => Ok(Item::Open(span)),
                TokenKind::CloseParen => Ok(Item::Close(span)),
                kind => Operator::from_token(kind)
                    .map(|op| Item::Operator(op, span.clone()))
                    .ok_or_else(|| Error::new(vec![span], Unreduced)),
            }
        })
        .collect()
}

/// Returns the indices of the opening and closing parentheses of the most deeply nested group.
///
/// The items are scanned left to right with a running depth; the first closing parenthesis at a
/// depth greater than any seen before it is chosen, along with the last unmatched opening
/// parenthesis before it. If several groups share the greatest depth, the leftmost is returned.
fn deepest_parentheses(items: &[Item]) -> Option<(usize, usize)> {
    let mut open_stack = Vec::new();
    let mut max_depth = 0;
    let mut deepest = None;

    for (i, item) in items.iter().enumerate() {
        match item {
            Item::Open(_) => open_stack.push(i),
            Item::Close(_) => {
                let depth = open_stack.len();
                let Some(open) = open_stack.pop() else {
                    continue;
                };
                if depth > max_depth {
                    max_depth = depth;
                    deepest = Some((open, i));
                }
            },
            _ => (),
        }
    }

    deepest
}

/// Reduces `items[start..end]` to a single operand in place, returning the resulting
/// polynomial.
fn reduce(
    items: &mut Vec<Item>,
    start: usize,
    mut end: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Polynomial, Error> {
    let mut failure = None;

    for pass in Operator::PASSES {
        let mut i = start + 1;
        while i + 1 < end {
            let outcome = match (&items[i - 1], &items[i], &items[i + 1]) {
                (
                    Item::Operand(left, left_span),
                    Item::Operator(op, op_span),
                    Item::Operand(right, right_span),
                ) if pass.contains(op) => {
                    let spans = vec![left_span.clone(), op_span.clone(), right_span.clone()];
                    let reduction = op.apply(left, right).map(|result| Reduction {
                        left: left.clone(),
                        right: right.clone(),
                        result,
                    });
                    Some((*op, reduction, spans))
                },
                _ => None,
            };

            match outcome {
                Some((op, Ok(reduction), spans)) => {
                    log::trace!(
                        "{:?}: ({}) and ({}) => {}",
                        op,
                        reduction.left,
                        reduction.right,
                        reduction.result,
                    );
                    let operand = Item::Operand(reduction.result.clone(), spans[0].start..spans[2].end);
                    step_collector.push(op.step(reduction));
                    items.splice(i - 1..=i + 1, [operand]);
                    end -= 2;
                },
                Some((op, Err(err), spans)) => {
                    log::trace!("skipping {:?}: {}", op, err);
                    failure.get_or_insert_with(|| error::from_arithmetic(err, spans));
                    i += 2;
                },
                None => i += 1,
            }
        }
    }

    match items.get(start..end) {
        Some([Item::Operand(result, _)]) => Ok(result.clone()),
        _ => Err(failure.unwrap_or_else(|| {
            let first = items.get(start).map(Item::span);
            let last = end.checked_sub(1).and_then(|i| items.get(i)).map(Item::span);
            let span = match (first, last) {
                (Some(first), Some(last)) => first.start..last.end,
                _ => 0..0,
            };
            Error::new(vec![span], Unreduced)
        })),
    }
}

/// Simplifies the given expression into a canonical [`Polynomial`].
///
/// Whitespace is removed before parsing, so the spans of any returned error refer to the input
/// with whitespace removed (see [`strip_whitespace`]).
pub fn simplify(input: &str) -> Result<Polynomial, Error> {
    simplify_with(input, &mut ())
}

/// Simplifies the given expression, collecting the steps taken.
pub fn simplify_with_steps(input: &str) -> Result<(Polynomial, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let result = simplify_with(input, &mut steps)?;
    Ok((result, steps))
}

/// Simplifies the given expression, reporting each step to the given [`StepCollector`].
pub fn simplify_with(input: &str, step_collector: &mut dyn StepCollector<Step>) -> Result<Polynomial, Error> {
    let source = strip_whitespace(input);
    log::debug!("simplifying `{}`", source);

    let tokens = parse(&source)?;
    let mut items = to_items(&tokens)?;

    while let Some((open, close)) = deepest_parentheses(&items) {
        let result = reduce(&mut items, open + 1, close, step_collector)?;
        // only the reduced operand is left between the parentheses
        let span = items[open].span().start..items[open + 2].span().end;
        log::debug!("evaluated parentheses at {:?} to `{}`", span, result);

        step_collector.push(Step::EvaluateParentheses(result.clone()));
        items.splice(open..=open + 2, [Item::Operand(result, span)]);
    }

    let len = items.len();
    let result = reduce(&mut items, 0, len, step_collector)?;
    log::debug!("simplified `{}` to `{}`", source, result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use crate::error::*;
    use pretty_assertions::assert_eq;
    use super::*;

    fn simplified(input: &str) -> String {
        simplify(input).unwrap().to_string()
    }

    #[test]
    fn combine_like_terms() {
        assert_eq!(simplified("3ab^2+3a^2b-2ab^2+4a^2b"), "7a^2b+ab^2");
    }

    #[test]
    fn nested_parentheses() {
        assert_eq!(simplified("2(x+4(x^2-3)(2x+1))-4"), "16x^3+8x^2-46x-28");
    }

    #[test]
    fn zero() {
        assert_eq!(simplified("0"), "0");
        assert_eq!(simplified("x-x"), "0");
    }

    #[test]
    fn constants() {
        assert_eq!(simplified("4(9+3-2*4-3)*4-9"), "7");
        assert_eq!(simplified("-2^2"), "-4");
        assert_eq!(simplified("2^3^2"), "64");
        assert_eq!(simplified("12/4/3"), "1");
    }

    #[test]
    fn products() {
        assert_eq!(simplified("(x+3)(x+2)"), "x^2+5x+6");
        assert_eq!(simplified("(x-4)^2"), "x^2-8x+16");
        assert_eq!(
            simplified("(x-4)^2*4(x^2+3)^3"),
            "4x^8-32x^7+100x^6-288x^5+684x^4-864x^3+1836x^2-864x+1728",
        );
        assert_eq!(
            simplified("(a+b+c)^3"),
            "a^3+3a^2b+3a^2c+3ab^2+6abc+3ac^2+b^3+3b^2c+3bc^2+c^3",
        );
    }

    #[test]
    fn mixed_literals() {
        assert_eq!(simplified("8*10^2+ax+5b*23ax*b"), "115ab^2x+ax+800");
    }

    #[test]
    fn unary_signs() {
        assert_eq!(simplified("-(x-1)"), "-x+1");
        assert_eq!(simplified("x*-y"), "-xy");
        assert_eq!(simplified("+x--x"), "2x");
        assert_eq!(simplified("-+x"), simplified("+-x"));
        assert_eq!(simplified("y-+x"), "-x+y");
    }

    #[test]
    fn division() {
        assert_eq!(simplified("(4x^3-8x^2+12x)/4x"), "x^2-2x+3");
        assert_eq!(simplified("6x^2/3x*2"), "4x");
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(simplified(" 2 x ^ 2 + 1 0 "), "2x^2+10");
    }

    #[test]
    fn cancelled_terms_then_constants() {
        assert_eq!(simplified("x+5-x+2"), "7");
        assert_eq!(simplified("(x+5)+(2-x)"), "7");
        assert_eq!(simplified("(x+5)-(x-2)"), "7");
        assert_eq!(simplified("(xy+3)(2)+(1-2xy)"), "7");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "2(x+4(x^2-3)(2x+1))-4",
            "(a+b+c)^3",
            "3ab^2+3a^2b-2ab^2+4a^2b",
            "-x^2y+7",
            "x+5-x+2",
            "(x+5)+(2-x)",
        ];
        for input in inputs {
            let once = simplified(input);
            assert_eq!(simplified(&once), once);
        }
    }

    #[test]
    fn commutative() {
        assert_eq!(simplified("a+b"), simplified("b+a"));
        assert_eq!(simplified("ab*c"), simplified("c*ba"));
        assert_eq!(simplified("(x+1)(y-2)"), simplified("(y-2)(1+x)"));
        assert_eq!(simplified("(a+b)+c"), simplified("a+(b+c)"));
        assert_eq!(simplified("(ab)c"), simplified("a(bc)"));
    }

    #[test]
    fn steps() {
        let (result, steps) = simplify_with_steps("(x+1)(x-1)").unwrap();
        assert_eq!(result.to_string(), "x^2-1");
        assert!(matches!(
            steps.as_slice(),
            [
                Step::Add(_),
                Step::EvaluateParentheses(_),
                Step::Subtract(_),
                Step::EvaluateParentheses(_),
                Step::Multiply(_),
            ],
        ));
    }

    #[test]
    fn deepest_group_first() {
        let (_, steps) = simplify_with_steps("(1+(2+3))").unwrap();
        let evaluated = steps
            .iter()
            .filter_map(|step| match step {
                Step::EvaluateParentheses(result) => Some(result.to_string()),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(evaluated, vec!["5", "6"]);
    }

    /// Asserts that simplifying the input fails with an error of kind `K` with the given spans.
    fn assert_error<K: alg_error::ErrorKind + 'static>(input: &str, spans: &[Range<usize>]) {
        match simplify(input) {
            Ok(result) => panic!("expected an error, got {}", result),
            Err(err) => {
                assert!(err.is::<K>(), "unexpected error kind: {:?}", err.kind);
                assert_eq!(err.spans, spans);
            },
        }
    }

    #[test]
    fn non_integer_exponent() {
        assert_error::<NonIntegerExponent>("2^x", &[0..1, 1..2, 2..3]);
        assert_error::<NonIntegerExponent>("(x+1)^(y)", &[0..5, 5..6, 6..9]);
    }

    #[test]
    fn negative_exponent() {
        assert_error::<NegativeExponent>("2^(0-1)", &[0..1, 1..2, 2..7]);
    }

    #[test]
    fn not_divisible() {
        assert_error::<NotDivisible>("x/2", &[0..1, 1..2, 2..3]);
        assert_error::<NotDivisible>("x/(x+1)", &[0..1, 1..2, 2..7]);
    }

    #[test]
    fn division_by_zero() {
        assert_error::<DivisionByZero>("x/(1-1)", &[0..1, 1..2, 2..7]);
    }

    #[test]
    fn overflow() {
        assert_error::<Overflow>("10^19", &[0..2, 2..3, 3..5]);
    }

    #[test]
    fn invalid_literal() {
        let err = simplify("99999999999999999999x").unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidLiteral>(),
            Some(&InvalidLiteral { reason: crate::algebra::ParseTermError::Overflow }),
        );
    }

    #[test]
    fn syntax_errors_are_forwarded() {
        assert!(simplify("x+").unwrap_err().is::<alg_parser::parser::error::MissingOperand>());
        assert!(simplify("").unwrap_err().is::<alg_parser::parser::error::EmptyExpression>());
    }

    #[test]
    fn first_failure_is_reported() {
        // powers are reduced before division
        assert_error::<NonIntegerExponent>("x/2+y^z", &[4..5, 5..6, 6..7]);
        assert_error::<NotDivisible>("x/2+y/3", &[0..1, 1..2, 2..3]);
    }
}
