/// Represents all errors that can occur during scope analysis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SemanticError {
    /// A name declared twice in the same scope.
    #[error("Error on line {line}: Duplicate identifier '{name}' in scope '{scope}'.")]
    DuplicateIdentifier {
        /// The identifier.
        name:  String,
        /// The scope that already holds the name.
        scope: String,
        /// The source line of the second declaration.
        line:  usize,
    },
    /// A declaration names a type that is not visible.
    #[error("Error on line {line}: Unknown type '{name}'.")]
    UnknownType {
        /// The type name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable read or assignment target that resolves to nothing.
    #[error("Error on line {line}: Reference before assignment: '{name}' is not declared.")]
    UndeclaredIdentifier {
        /// The identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A procedure or type name used where a variable is required.
    #[error("Error on line {line}: '{name}' is not a variable.")]
    NotAVariable {
        /// The identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl SemanticError {
    /// Gets the line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::DuplicateIdentifier { line, .. }
            | Self::UnknownType { line, .. }
            | Self::UndeclaredIdentifier { line, .. }
            | Self::NotAVariable { line, .. } => *line,
        }
    }
}
