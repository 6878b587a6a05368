/// Parser entry points and the expression grammar root.
///
/// Holds `ParseResult`, the whole-program and bare-expression entry points,
/// and the end-of-input check that rejects trailing tokens.
pub mod core;

/// Program, block and declaration parsing.
///
/// Covers `program`, `var` sections, procedure declarations with their formal
/// parameters, and type names.
pub mod program;

/// Statement parsing.
///
/// Covers compound statements, statement lists, assignments and the empty
/// statement.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: `+`/`-` and
/// `*`/`div`/`/`.
pub mod binary;

/// Unary operators and atoms.
///
/// Parses literals, variables, parenthesized expressions and prefix `+`/`-`.
pub mod unary;

/// Shared parser helpers.
///
/// Token consumption with expected/found diagnostics and identifier parsing.
pub mod utils;
