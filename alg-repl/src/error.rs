use alg_compute::strip_whitespace;
use alg_compute::Error as EvalError;

/// Utility enum to package errors that can occur while handling a line of input.
#[derive(Debug)]
pub enum Error {
    /// The input contains characters that cannot appear in an expression.
    InvalidInput,

    /// An error that occurred while simplifying the expression.
    EvalError(EvalError),
}

impl Error {
    /// Report the error to stderr.
    ///
    /// Error spans refer to the input with whitespace removed, so that is the source shown in
    /// the report.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::InvalidInput => eprintln!(
                "Invalid input: expressions may only contain lowercase letters, digits, whitespace, and the symbols `+ - * / ^ ( )`",
            ),
            Self::EvalError(err) => {
                if let Err(io_err) = err.report_to_stderr("input", &strip_whitespace(input)) {
                    log::error!("could not write error report: {}", io_err);
                }
            },
        }
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Self::EvalError(err)
    }
}
