/// The reason a token could not be produced.
///
/// This is the error type the generated lexer reports. It carries no
/// location; [`LexError`] adds the slice, line and column once the wrapper
/// sees the failure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No token pattern matches at this position.
    #[default]
    UnexpectedCharacter,
    /// An integer literal does not fit in 64 bits.
    IntegerOutOfRange,
    /// A real literal could not be turned into a finite float.
    MalformedReal,
}

/// Represents all errors that can occur while tokenizing source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("Error on line {line}, column {column}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The column where the error occurred.
        column:    usize,
    },
    /// A `{` comment that is never closed.
    #[error("Error on line {line}, column {column}: Comment is never closed with '}}'.")]
    UnterminatedComment {
        /// The source line where the comment starts.
        line:   usize,
        /// The column where the comment starts.
        column: usize,
    },
    /// An integer literal that does not fit in 64 bits.
    #[error("Error on line {line}, column {column}: Integer literal {literal} is too large.")]
    IntegerOutOfRange {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The column where the error occurred.
        column:  usize,
    },
    /// A real literal that cannot be represented as a finite float.
    #[error("Error on line {line}, column {column}: Malformed real literal {literal}.")]
    MalformedReal {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The column where the error occurred.
        column:  usize,
    },
}

impl LexError {
    /// Attaches location and source text to a failure reported by the
    /// generated lexer.
    pub(crate) fn new(kind: LexErrorKind, slice: &str, line: usize, column: usize) -> Self {
        match kind {
            LexErrorKind::UnexpectedCharacter if slice.starts_with('{') => {
                Self::UnterminatedComment { line, column }
            },
            LexErrorKind::UnexpectedCharacter => {
                Self::UnexpectedCharacter { character: slice.chars().next().unwrap_or('\0'),
                                            line,
                                            column }
            },
            LexErrorKind::IntegerOutOfRange => Self::IntegerOutOfRange { literal: slice.to_string(),
                                                                         line,
                                                                         column },
            LexErrorKind::MalformedReal => Self::MalformedReal { literal: slice.to_string(),
                                                                 line,
                                                                 column },
        }
    }

    /// Gets the line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedComment { line, .. }
            | Self::IntegerOutOfRange { line, .. }
            | Self::MalformedReal { line, .. } => *line,
        }
    }

    /// Gets the column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { column, .. }
            | Self::UnterminatedComment { column, .. }
            | Self::IntegerOutOfRange { column, .. }
            | Self::MalformedReal { column, .. } => *column,
        }
    }
}
