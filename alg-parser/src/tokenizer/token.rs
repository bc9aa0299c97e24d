use logos::Logos;
use std::ops::Range;

/// The different kinds of raw tokens that can be produced by the lexer.
///
/// Raw tokens are assembled into [`Token`]s by [`tokenize_complete`](super::tokenize_complete);
/// in particular, [`RawKind::Int`], [`RawKind::Name`] and [`RawKind::Exp`] are joined into term
/// literals where they are adjacent.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[0-9]+")]
    Int,

    /// A single variable letter. Every letter is its own variable.
    #[regex(r"[a-z]")]
    Name,

    #[regex(r".", priority = 0)]
    Symbol,
}

/// The different kinds of tokens in an assembled token stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A term literal, such as `4x^2y`, `12` or `-1`.
    Term,

    Add,
    Sub,
    Mul,
    Div,
    Exp,
    OpenParen,
    CloseParen,

    /// A character that cannot appear in an expression.
    Symbol,
}

impl TokenKind {
    /// Returns true if the token is a binary operator.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Add | TokenKind::Sub | TokenKind::Mul | TokenKind::Div | TokenKind::Exp
        )
    }

    /// Returns true if an operand can end with this token, i.e. it is a term literal or a
    /// closing parenthesis.
    pub fn ends_operand(self) -> bool {
        matches!(self, TokenKind::Term | TokenKind::CloseParen)
    }

    /// Returns true if an operand can begin with this token, i.e. it is a term literal or an
    /// opening parenthesis.
    pub fn starts_operand(self) -> bool {
        matches!(self, TokenKind::Term | TokenKind::OpenParen)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from. Tokens inserted by the
    /// repair pass have an empty span.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl<'source> Token<'source> {
    /// Creates a token that does not appear in the source code, such as an implicit
    /// multiplication. It is given an empty span at the given position.
    pub fn implicit(kind: TokenKind, lexeme: &'static str, at: usize) -> Self {
        Self { span: at..at, kind, lexeme }
    }

    /// Returns true if the token was inserted by the repair pass rather than read from the
    /// source.
    pub fn is_implicit(&self) -> bool {
        self.span.is_empty()
    }
}
