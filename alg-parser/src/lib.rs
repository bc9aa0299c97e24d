//! Turns polynomial expressions such as `2(x+4(x^2-3)(2x+1))-4` into a validated stream of
//! term literals, operators, and parentheses.
//!
//! Processing happens in three stages:
//!
//! 1. [`tokenizer`]: the source is lexed into raw tokens, which are then assembled into term
//!    literals (`4x^2y`, `-1`, `12`) and single-character operators / parentheses.
//! 2. [`parser::repair`]: unary signs are rewritten, implicit multiplication is inserted at
//!    juxtaposition (`2(x+1)`, `(x+1)(x-1)`, `2 x`), and missing closing parentheses are
//!    appended.
//! 3. [`parser::validate`]: the stream is checked for structural errors, which are reported as
//!    [`alg_error::Error`]s.
//!
//! Most users only need [`parser::parse`], which runs all three stages.

pub mod input;
pub mod parser;
pub mod tokenizer;
