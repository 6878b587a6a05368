/// The analyzer module checks a parsed program before it runs.
///
/// The analyzer walks the tree with a chain of nested scopes, recording every
/// declaration and resolving every variable reference against the scopes
/// currently open.
///
/// # Responsibilities
/// - Maintains scopes with their names, nesting levels and symbol tables.
/// - Rejects duplicate declarations within one scope.
/// - Rejects unknown type names and references to undeclared identifiers.
pub mod analyzer;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses a validated tree, evaluates assignments and
/// expressions, and writes results into the variable store.
///
/// # Responsibilities
/// - Evaluates expressions under the integer/real promotion rules.
/// - Stores assigned values and reports the last one.
/// - Reports runtime faults such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// carrying its span and line/column position. Keywords and identifiers are
/// case-insensitive; comments in braces are discarded.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Distinguishes integer and real literals, `:` and `:=`.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one token of lookahead. Each grammar rule
/// is a function over a peekable token stream.
///
/// # Responsibilities
/// - Converts tokens into program, declaration, statement and expression
///   nodes.
/// - Encodes operator precedence and left associativity in the tree shape.
/// - Reports the first token that does not fit the grammar, with its
///   position.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are either integers or reals, with promotion from integer to real
/// when the two meet.
pub mod value;
