//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

// lets `#[derive(ErrorKind)]` refer to `alg_error::EXPR` from inside this crate's own tests
extern crate self as alg_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error as [`Any`], so that callers can check which kind of error occurred.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error as `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, highlighting the given source.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, src: &str) -> std::io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(src)))
    }

    /// Renders the report for this error into a string. The output includes ANSI color codes.
    pub fn report_to_string(&self, src_id: &str, src: &str) -> String {
        let mut buf = Vec::new();
        // writing into a `Vec` cannot fail
        let _ = self.build_report(src_id).write((src_id, Source::from(src)), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use alg_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = "missing operand",
        labels = ["this operator", "needs a term here"],
        help = "add a term",
    )]
    struct MissingOperand;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = format!("the symbol `{}` is not allowed", symbol),
        labels = [format!("`{}`", symbol)],
    )]
    struct BadSymbol {
        symbol: char,
    }

    /// Renders the error against the given source with ANSI escapes removed.
    fn render(err: &Error, src: &str) -> String {
        let raw = err.report_to_string("input", src);
        String::from_utf8(strip_ansi_escapes::strip(raw.as_bytes())).unwrap()
    }

    #[test]
    fn report_contains_message_and_labels() {
        let err = Error::new(vec![1..2, 2..2], MissingOperand);
        let rendered = render(&err, "x+");
        assert!(rendered.contains("missing operand"));
        assert!(rendered.contains("this operator"));
        assert!(rendered.contains("needs a term here"));
        assert!(rendered.contains("add a term"));
    }

    #[test]
    fn report_uses_fields() {
        let err = Error::new(vec![1..2], BadSymbol { symbol: '$' });
        let rendered = render(&err, "x$");
        assert!(rendered.contains("the symbol `$` is not allowed"));
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..1], BadSymbol { symbol: '#' });
        assert!(err.is::<BadSymbol>());
        assert!(!err.is::<MissingOperand>());
        assert_eq!(err.downcast_ref::<BadSymbol>().map(|k| k.symbol), Some('#'));
    }
}
