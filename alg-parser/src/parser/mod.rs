pub mod error;
pub mod repair;
pub mod validate;

use crate::tokenizer::{tokenize_complete, Token};
use error::Error;
pub use repair::repair;
pub use validate::validate;

/// Tokenizes, repairs and validates the given source, returning the token stream ready to be
/// simplified.
///
/// The source should already be stripped of whitespace (see
/// [`strip_whitespace`](crate::input::strip_whitespace)); whitespace is tolerated, but it
/// separates term literals, so `2 3` means `2*3` rather than `23`.
pub fn parse(source: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = tokenize_complete(source).into_vec();
    repair(&mut tokens, source.len());
    log::trace!(
        "repaired token stream: {}",
        tokens.iter().map(|token| token.lexeme).collect::<Vec<_>>().join(" "),
    );

    validate(&tokens, source.len())?;
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use crate::tokenizer::TokenKind;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn parse_inserts_and_validates() {
        let tokens = parse("2(x+1)").unwrap();
        let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![
            TokenKind::Term,
            TokenKind::Mul,
            TokenKind::OpenParen,
            TokenKind::Term,
            TokenKind::Add,
            TokenKind::Term,
            TokenKind::CloseParen,
        ]);
        assert!(tokens[1].is_implicit());
    }

    #[test]
    fn whitespace_separates_literals() {
        let tokens = parse("2 3").unwrap();
        let lexemes = tokens.iter().map(|token| token.lexeme).collect::<Vec<_>>();
        assert_eq!(lexemes, vec!["2", "*", "3"]);
    }
}
