//! Structural validation of a repaired token stream.

use crate::tokenizer::{Token, TokenKind};
use super::error::{
    EmptyExpression,
    EmptyParenthesis,
    Error,
    InvalidCharacter,
    MissingOperand,
    UnclosedParenthesis,
};

/// Checks the token stream for syntax errors, returning the first one found.
///
/// A valid stream contains at least one term and only known tokens, its parentheses are balanced
/// and never empty, and every operator has an operand on both sides.
pub fn validate(tokens: &[Token], source_len: usize) -> Result<(), Error> {
    if let Some(token) = tokens.iter().find(|token| token.kind == TokenKind::Symbol) {
        let character = token.lexeme.chars().next().unwrap_or('\u{fffd}');
        return Err(Error::new(vec![token.span.clone()], InvalidCharacter { character }));
    }

    if !tokens.iter().any(|token| token.kind == TokenKind::Term) {
        return Err(Error::new(vec![0..source_len], EmptyExpression));
    }

    let mut open_parens = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        let prev = i.checked_sub(1).map(|i| &tokens[i]);
        let next = tokens.get(i + 1);

        match token.kind {
            TokenKind::OpenParen => {
                open_parens.push(token);
                if let Some(close) = next.filter(|next| next.kind == TokenKind::CloseParen) {
                    return Err(Error::new(
                        vec![token.span.start..close.span.end.max(token.span.end)],
                        EmptyParenthesis,
                    ));
                }
            },
            TokenKind::CloseParen => {
                if open_parens.pop().is_none() {
                    return Err(Error::new(
                        vec![token.span.clone()],
                        UnclosedParenthesis { opening: false },
                    ));
                }
            },
            kind if kind.is_operator() => {
                if !prev.map_or(false, |prev| prev.kind.ends_operand()) {
                    return Err(Error::new(vec![token.span.clone()], MissingOperand { left: true }));
                }
                if !next.map_or(false, |next| next.kind.starts_operand()) {
                    return Err(Error::new(vec![token.span.clone()], MissingOperand { left: false }));
                }
            },
            _ => (),
        }
    }

    if let Some(open) = open_parens.last() {
        return Err(Error::new(vec![open.span.clone()], UnclosedParenthesis { opening: true }));
    }

    Ok(())
}
