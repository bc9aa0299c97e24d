//! Syntax errors detected while validating a token stream.

use alg_attrs::ErrorKind;
use alg_error::{ErrorKind, EXPR};
use ariadne::Fmt;

pub use alg_error::Error;

/// A character that cannot appear in an expression was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid character `{}`", character),
    labels = ["this character"],
    help = format!(
        "expressions may only contain {}, digits, whitespace, and the symbols `+ - * / ^ ( )`",
        "lowercase letters".fg(EXPR),
    ),
)]
pub struct InvalidCharacter {
    /// The offending character.
    pub character: char,
}

/// The expression does not contain a single term.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// An operator is missing one of its operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operand",
    labels = [if *left {
        format!("this operator needs an {} on its left", "expression".fg(EXPR))
    } else {
        format!("this operator needs an {} on its right", "expression".fg(EXPR))
    }],
)]
pub struct MissingOperand {
    /// Whether the operand is missing on the left side. Otherwise, it is missing on the right.
    pub left: bool,
}
