//! Character-class checks performed on raw input before it is tokenized.

/// Non-alphanumeric symbols that may appear in an expression.
pub const VALID_SYMBOLS: [char; 7] = ['+', '-', '/', '*', '(', ')', '^'];

/// Returns true if the character may appear in an expression: a lowercase ASCII letter, a digit,
/// whitespace, or one of the [`VALID_SYMBOLS`].
pub fn is_valid_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || VALID_SYMBOLS.contains(&c)
}

/// Returns true if the input is non-empty and consists only of valid characters.
pub fn is_valid_input(input: &str) -> bool {
    !input.is_empty() && input.chars().all(is_valid_char)
}

/// Removes all whitespace from the input. Error spans produced by later stages refer to the
/// returned string.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_expression_alphabet() {
        assert!(is_valid_input("2(x+4(x^2-3)(2x+1))-4"));
        assert!(is_valid_input("8 * 10^2 + a x / 4"));
    }

    #[test]
    fn rejects_other_characters() {
        assert!(!is_valid_input(""));
        assert!(!is_valid_input("2X+1"));
        assert!(!is_valid_input("x=1"));
        assert!(!is_valid_input("3.5x"));
        assert!(!is_valid_input("sqrt(x)!"));
    }

    #[test]
    fn strips_whitespace() {
        assert_eq!(strip_whitespace(" 3 x ^2 \t+ 1\n"), "3x^2+1");
    }
}
