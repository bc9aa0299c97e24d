//! Rewrites a freshly tokenized stream into the shape the simplifier expects.

use crate::tokenizer::{Token, TokenKind};

/// Returns true if a sign at index `i` is unary, i.e. it does not follow an operand.
fn is_unary_position(tokens: &[Token], i: usize) -> bool {
    i == 0 || {
        let prev = tokens[i - 1].kind;
        prev.is_operator() || prev == TokenKind::OpenParen
    }
}

/// Rewrites unary signs.
///
/// A unary `-` that is followed by an operand or another sign becomes the literal `-1` followed by
/// an implicit multiplication, so that `-2^2` is `-1*2^2`. A unary `+` in the same position is
/// removed. Signs that are not followed by an operand are left for validation to report.
fn rewrite_unary_signs(tokens: &mut Vec<Token>) {
    let mut i = 0;
    while i < tokens.len() {
        let kind = tokens[i].kind;
        let followed_by_operand = tokens.get(i + 1)
            .map_or(false, |next| {
                next.kind.starts_operand() || matches!(next.kind, TokenKind::Sub | TokenKind::Add)
            });

        if matches!(kind, TokenKind::Sub | TokenKind::Add)
            && followed_by_operand
            && is_unary_position(tokens, i)
        {
            if kind == TokenKind::Add {
                tokens.remove(i);
                continue;
            }

            let span = tokens[i].span.clone();
            tokens[i] = Token {
                span: span.clone(),
                kind: TokenKind::Term,
                lexeme: "-1",
            };
            tokens.insert(i + 1, Token::implicit(TokenKind::Mul, "*", span.end));
            i += 2;
            continue;
        }

        i += 1;
    }
}

/// Inserts implicit multiplication where two operands are juxtaposed:
///
/// - before an opening parenthesis preceded by a term or a closing parenthesis: `2(x)`, `(x)(y)`
/// - after a closing parenthesis followed by a term: `(x)2`
/// - between two adjacent terms: `2x 3y`
fn insert_implicit_multiplication(tokens: &mut Vec<Token>) {
    let mut i = 1;
    while i < tokens.len() {
        let (prev, current) = (tokens[i - 1].kind, tokens[i].kind);
        let juxtaposed = match current {
            TokenKind::OpenParen => prev.ends_operand(),
            TokenKind::Term => prev.ends_operand(),
            _ => false,
        };

        if juxtaposed {
            let at = tokens[i].span.start;
            tokens.insert(i, Token::implicit(TokenKind::Mul, "*", at));
            i += 1;
        }

        i += 1;
    }
}

/// Appends a closing parenthesis for every opening parenthesis that is never closed.
fn close_parentheses(tokens: &mut Vec<Token>, source_len: usize) {
    let mut depth = 0usize;
    for token in tokens.iter() {
        match token.kind {
            TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => depth = depth.saturating_sub(1),
            _ => (),
        }
    }

    for _ in 0..depth {
        tokens.push(Token::implicit(TokenKind::CloseParen, ")", source_len));
    }
}

/// Repairs the token stream in place: rewrites unary signs, inserts implicit multiplication, and
/// closes unclosed parentheses at the end of the stream.
pub fn repair(tokens: &mut Vec<Token>, source_len: usize) {
    rewrite_unary_signs(tokens);
    insert_implicit_multiplication(tokens);
    close_parentheses(tokens, source_len);
}

#[cfg(test)]
mod tests {
    use crate::tokenizer::tokenize_complete;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Tokenizes and repairs the input, then joins the lexemes back together.
    fn repaired(input: &str) -> String {
        let mut tokens = tokenize_complete(input).into_vec();
        repair(&mut tokens, input.len());
        tokens.iter().map(|token| token.lexeme).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn implicit_before_paren() {
        assert_eq!(repaired("2(x+1)"), "2 * ( x + 1 )");
        assert_eq!(repaired("(x+1)(x-1)"), "( x + 1 ) * ( x - 1 )");
    }

    #[test]
    fn implicit_after_paren() {
        assert_eq!(repaired("(x+1)y"), "( x + 1 ) * y");
    }

    #[test]
    fn implicit_between_terms() {
        assert_eq!(repaired("2x3y"), "2x * 3y");
    }

    #[test]
    fn nested_implicit() {
        assert_eq!(
            repaired("2(x+4(x^2-3)(2x+1))-4"),
            "2 * ( x + 4 * ( x^2 - 3 ) * ( 2x + 1 ) ) - 4",
        );
    }

    #[test]
    fn unary_minus() {
        assert_eq!(repaired("-x+1"), "-1 * x + 1");
        assert_eq!(repaired("(-x)"), "( -1 * x )");
        assert_eq!(repaired("2*-3"), "2 * -1 * 3");
        assert_eq!(repaired("-(x+1)"), "-1 * ( x + 1 )");
        assert_eq!(repaired("x--3"), "x - -1 * 3");
    }

    #[test]
    fn binary_minus_after_paren() {
        assert_eq!(repaired("(x)-3"), "( x ) - 3");
    }

    #[test]
    fn unary_plus() {
        assert_eq!(repaired("+x"), "x");
        assert_eq!(repaired("(+x)"), "( x )");
    }

    #[test]
    fn stacked_signs() {
        assert_eq!(repaired("+-x"), "-1 * x");
        assert_eq!(repaired("-+x"), "-1 * x");
        assert_eq!(repaired("x*-+y"), "x * -1 * y");
        assert_eq!(repaired("++x"), "x");
    }

    #[test]
    fn dangling_sign_is_kept() {
        assert_eq!(repaired("x*-"), "x * -");
    }

    #[test]
    fn closes_parentheses() {
        let mut tokens = tokenize_complete("2(x+(y").into_vec();
        repair(&mut tokens, 6);
        let closing = tokens.iter().filter(|t| t.kind == TokenKind::CloseParen).collect::<Vec<_>>();
        assert_eq!(closing.len(), 2);
        assert!(closing.iter().all(|t| t.is_implicit() && t.span == (6..6)));
    }
}
