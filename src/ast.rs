/// Represents a numeric literal as written in the source.
///
/// The lexer decides the variant: digit runs become `Integer`, digit runs
/// with a fractional part become `Real`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// The root of a parsed program: `program <name>; <block>.`
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The program name, case-normalized.
    pub name:  String,
    /// The program body.
    pub block: Block,
    /// Line number in the source code.
    pub line:  usize,
}

/// Declarations followed by the compound statement they scope over.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Variable and procedure declarations, in source order.
    pub declarations: Vec<Declaration>,
    /// The statements executed for this block.
    pub compound:     Compound,
}

/// A single declaration inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `name : type`
    Variable(VarDecl),
    /// `procedure name(params); block;`
    Procedure(ProcDecl),
}

/// Declares one variable. `var a, b: integer;` yields one `VarDecl` per
/// name.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// The variable name, case-normalized.
    pub name:      String,
    /// The declared type.
    pub type_spec: TypeSpec,
    /// Line number in the source code.
    pub line:      usize,
}

/// Declares a procedure with its own scope.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcDecl {
    /// The procedure name, case-normalized.
    pub name:   String,
    /// Formal parameters, in declaration order.
    pub params: Vec<Param>,
    /// The procedure body.
    pub block:  Block,
    /// Line number in the source code.
    pub line:   usize,
}

/// A formal parameter of a procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// The parameter name, case-normalized.
    pub name:      String,
    /// The declared type.
    pub type_spec: TypeSpec,
    /// Line number in the source code.
    pub line:      usize,
}

/// A type named in a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSpec {
    /// Which builtin type was written.
    pub name: TypeName,
    /// Line number in the source code.
    pub line: usize,
}

/// The type names the grammar accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// `integer`
    Integer,
    /// `real`
    Real,
}

impl TypeName {
    /// The name the type is registered under in the global scope.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Real => "real",
        }
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `begin <statement>; ... end`
#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    /// The statements, in execution order.
    pub children: Vec<Statement>,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A nested `begin ... end`.
    Compound(Compound),
    /// `target := value`
    Assign {
        /// The variable being assigned.
        target: VariableRef,
        /// The value which is being assigned.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// The empty statement, e.g. between `;` and `end`.
    NoOp,
}

/// A use of a variable by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRef {
    /// Name of the variable, case-normalized.
    pub name: String,
    /// Line number in the source code.
    pub line: usize,
}

/// An abstract syntax tree (AST) node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable(VariableRef),
    /// A unary operation (`+x`, `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use pascalina::ast::{Expr, VariableRef};
    ///
    /// let expr = Expr::Variable(VariableRef { name: "x".to_string(),
    ///                                         line: 5, });
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Variable(VariableRef { line, .. })
            | Self::Literal { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating integer division (`div`)
    IntegerDiv,
    /// Float division (`/`)
    FloatDiv,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::IntegerDiv => "div",
            Self::FloatDiv => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}
