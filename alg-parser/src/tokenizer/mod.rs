pub mod token;

use logos::{Lexer, Logos};
use std::ops::Range;
pub use token::{RawKind, Token, TokenKind};

/// Returns an iterator over the raw token kinds produced by the lexer.
pub fn tokenize(input: &str) -> Lexer<RawKind> {
    RawKind::lexer(input)
}

/// Returns the raw tokens of the input along with their spans. Input the lexer does not
/// recognize is reported as [`RawKind::Symbol`].
fn tokenize_raw(input: &str) -> Vec<(RawKind, Range<usize>)> {
    tokenize(input)
        .spanned()
        .map(|(kind, span)| (kind.unwrap_or(RawKind::Symbol), span))
        .collect()
}

/// Returns the index one past the end of the term literal beginning at `start`.
///
/// A term literal is an optional run of digits followed by any number of letters, each of which
/// may carry a `^` exponent. The `^` is only part of the literal if it directly follows a letter
/// and is directly followed by digits; otherwise it is the power operator.
fn term_literal_end(raw: &[(RawKind, Range<usize>)], start: usize) -> usize {
    let mut cursor = start;
    if raw[cursor].0 == RawKind::Int {
        cursor += 1;
    }

    while cursor < raw.len() && raw[cursor].0 == RawKind::Name {
        cursor += 1;
        if matches!(
            (raw.get(cursor), raw.get(cursor + 1)),
            (Some((RawKind::Exp, _)), Some((RawKind::Int, _)))
        ) {
            cursor += 2;
        }
    }

    cursor
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, with adjacent
/// digits, letters and exponents assembled into [`TokenKind::Term`] literals. Whitespace is
/// discarded.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let raw = tokenize_raw(input);
    let mut tokens = Vec::with_capacity(raw.len());
    let mut cursor = 0;

    while cursor < raw.len() {
        let (raw_kind, span) = raw[cursor].clone();
        let kind = match raw_kind {
            RawKind::Whitespace => {
                cursor += 1;
                continue;
            },
            RawKind::Int | RawKind::Name => {
                let end = term_literal_end(&raw, cursor);
                let span = span.start..raw[end - 1].1.end;
                tokens.push(Token {
                    lexeme: &input[span.clone()],
                    span,
                    kind: TokenKind::Term,
                });
                cursor = end;
                continue;
            },
            RawKind::Add => TokenKind::Add,
            RawKind::Sub => TokenKind::Sub,
            RawKind::Mul => TokenKind::Mul,
            RawKind::Div => TokenKind::Div,
            RawKind::Exp => TokenKind::Exp,
            RawKind::OpenParen => TokenKind::OpenParen,
            RawKind::CloseParen => TokenKind::CloseParen,
            RawKind::Symbol => TokenKind::Symbol,
        };

        tokens.push(Token {
            lexeme: &input[span.clone()],
            span,
            kind,
        });
        cursor += 1;
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the raw tokens produced by the lexer to the raw expected tokens.
    fn compare_raw<'source, const N: usize>(input: &'source str, expected: [(RawKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    /// Compares the assembled tokens to the expected kinds and lexemes.
    fn compare_tokens<const N: usize>(input: &str, expected: [(TokenKind, &str); N]) {
        let tokens = tokenize_complete(input)
            .iter()
            .map(|token| (token.kind, token.lexeme))
            .collect::<Vec<_>>();
        assert_eq!(tokens, expected.to_vec());
    }

    #[test]
    fn raw_expr() {
        compare_raw(
            "12x^2 - y",
            [
                (RawKind::Int, "12"),
                (RawKind::Name, "x"),
                (RawKind::Exp, "^"),
                (RawKind::Int, "2"),
                (RawKind::Whitespace, " "),
                (RawKind::Sub, "-"),
                (RawKind::Whitespace, " "),
                (RawKind::Name, "y"),
            ],
        );
    }

    #[test]
    fn raw_symbols() {
        compare_raw(
            "X=$",
            [
                (RawKind::Symbol, "X"),
                (RawKind::Symbol, "="),
                (RawKind::Symbol, "$"),
            ],
        );
    }

    #[test]
    fn term_literals() {
        compare_tokens(
            "3ab^2+3a^2b-2ab^2",
            [
                (TokenKind::Term, "3ab^2"),
                (TokenKind::Add, "+"),
                (TokenKind::Term, "3a^2b"),
                (TokenKind::Sub, "-"),
                (TokenKind::Term, "2ab^2"),
            ],
        );
    }

    #[test]
    fn number_exponent_is_operator() {
        compare_tokens(
            "8*10^2",
            [
                (TokenKind::Term, "8"),
                (TokenKind::Mul, "*"),
                (TokenKind::Term, "10"),
                (TokenKind::Exp, "^"),
                (TokenKind::Term, "2"),
            ],
        );
    }

    #[test]
    fn paren_exponent_is_operator() {
        compare_tokens(
            "(x-4)^2",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Term, "x"),
                (TokenKind::Sub, "-"),
                (TokenKind::Term, "4"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Exp, "^"),
                (TokenKind::Term, "2"),
            ],
        );
    }

    #[test]
    fn caret_without_digits() {
        compare_tokens(
            "x^(2)",
            [
                (TokenKind::Term, "x"),
                (TokenKind::Exp, "^"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Term, "2"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn digits_after_letter_start_new_literal() {
        compare_tokens(
            "2x3y",
            [
                (TokenKind::Term, "2x"),
                (TokenKind::Term, "3y"),
            ],
        );
    }

    #[test]
    fn whitespace_is_discarded() {
        let tokens = tokenize_complete("x + 1");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].span, 4..5);
    }
}
