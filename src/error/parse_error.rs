/// Represents all errors that can occur during parsing.
///
/// Parsing never recovers: the first mismatch aborts the pass and is
/// returned as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A token other than the one the grammar requires at this point.
    #[error("Error on line {line}, column {column}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// What the grammar required.
        expected: String,
        /// What the token stream contained.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The column where the error occurred.
        column:   usize,
    },
    /// Input continues after a complete program or expression.
    #[error("Error on line {line}, column {column}: Extra tokens after the end of input, starting with {found}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column where the error occurred.
        column: usize,
    },
}

impl ParseError {
    /// Gets the line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. } | Self::UnexpectedTrailingTokens { line, .. } => {
                *line
            },
        }
    }
}
