/// The semantic analysis pass.
///
/// Walks a parsed tree once, opening a scope per procedure, and rejects
/// duplicate declarations, unknown types and undeclared names before any
/// evaluation happens.
pub mod core;

/// Scoped symbol tables.
///
/// Scopes live in an arena and point at their enclosing scope by id, so the
/// chain needs no shared ownership.
pub mod scope;

/// Symbols recorded by analysis: builtin types, variables and procedures.
pub mod symbol;
