/// Lexical errors.
///
/// Raised while turning source text into tokens: unknown characters,
/// unterminated comments and numeric literals that cannot be represented.
pub mod lex_error;
/// Parsing errors.
///
/// Raised when the token stream does not match the grammar at some decision
/// point, including trailing input after the program's closing `.`.
pub mod parse_error;
/// Runtime errors.
///
/// Raised while evaluating a validated tree: arithmetic faults and reads of
/// variables the store does not hold.
pub mod runtime_error;
/// Semantic errors.
///
/// Raised by scope analysis: duplicate declarations, unknown type names and
/// references to identifiers that are not visible.
pub mod semantic_error;

pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;

/// The pass that produced an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Raised by the lexer.
    Lex,
    /// Raised by the parser.
    Parse,
    /// Raised by the semantic analyzer.
    Semantic,
    /// Raised by the evaluator.
    Runtime,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Lex => "LexError",
            Self::Parse => "ParseError",
            Self::Semantic => "SemanticError",
            Self::Runtime => "RuntimeError",
        };
        write!(f, "{name}")
    }
}

/// A fatal diagnostic from any pass of the pipeline.
///
/// Each pass aborts on its first fault, so a run produces at most one of
/// these and never a partial result alongside it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The lexer rejected the source text.
    #[error("LexError: {0}")]
    Lex(#[from] LexError),
    /// The parser rejected the token stream.
    #[error("ParseError: {0}")]
    Parse(#[from] ParseError),
    /// Scope analysis rejected the tree.
    #[error("SemanticError: {0}")]
    Semantic(#[from] SemanticError),
    /// Evaluation failed.
    #[error("RuntimeError: {0}")]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns which pass raised this error.
    ///
    /// # Example
    /// ```
    /// use pascalina::{error::ErrorCategory, run_program};
    ///
    /// let err = run_program("program p; begin y := 1 end.").unwrap_err();
    /// assert_eq!(err.category(), ErrorCategory::Semantic);
    /// ```
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Lex(_) => ErrorCategory::Lex,
            Self::Parse(_) => ErrorCategory::Parse,
            Self::Semantic(_) => ErrorCategory::Semantic,
            Self::Runtime(_) => ErrorCategory::Runtime,
        }
    }
}
