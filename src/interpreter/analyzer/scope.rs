use indexmap::IndexMap;
use log::trace;

use crate::{error::SemanticError, interpreter::analyzer::symbol::Symbol};

/// Index of a scope inside a [`ScopeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

/// A scoped symbol table.
///
/// Names are unique within one scope; an inner scope may reuse a name from
/// an enclosing one.
#[derive(Debug, Clone)]
pub struct Scope {
    name:    String,
    level:   usize,
    parent:  Option<ScopeId>,
    symbols: IndexMap<String, Symbol>,
}

impl Scope {
    /// The scope name: `global` or the procedure name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nesting depth. The global scope is level 1.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// The enclosing scope, `None` for the global scope.
    #[must_use]
    pub const fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    /// Looks a name up in this scope only.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = "SCOPE (SCOPED SYMBOL TABLE)";
        writeln!(f, "{title}")?;
        writeln!(f, "{}", "=".repeat(title.len()))?;
        writeln!(f, "Scope name : {}", self.name)?;
        writeln!(f, "Scope level: {}", self.level)?;
        let contents = "Scope (Scoped symbol table) contents";
        writeln!(f, "{contents}")?;
        write!(f, "{}", "-".repeat(contents.len()))?;
        for (name, symbol) in &self.symbols {
            write!(f, "\n{name:>7}: {symbol}")?;
        }
        Ok(())
    }
}

/// The chain of scopes that are open while a tree is analyzed.
///
/// Scopes are stored in an arena and refer to their parent by [`ScopeId`].
/// They open and close in strict nesting order, so closing a scope pops it
/// off the arena and every id on the live chain stays valid. The global
/// scope is created with the tree and is never closed.
#[derive(Debug, Clone)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
}

impl ScopeTree {
    /// Creates a tree holding only an empty global scope at level 1.
    #[must_use]
    pub fn new(global_name: &str) -> Self {
        Self { scopes: vec![Scope { name:    global_name.to_string(),
                                    level:   1,
                                    parent:  None,
                                    symbols: IndexMap::new(), }], }
    }

    /// Creates a tree whose global scope already holds `builtins`.
    ///
    /// A later builtin with the same name as an earlier one replaces it.
    #[must_use]
    pub fn with_builtins(global_name: &str, builtins: impl IntoIterator<Item = Symbol>) -> Self {
        let mut tree = Self::new(global_name);
        tree.scopes[0].symbols
                      .extend(builtins.into_iter()
                                      .map(|symbol| (symbol.name().to_string(), symbol)));
        tree
    }

    /// The innermost open scope.
    #[must_use]
    pub fn current_id(&self) -> ScopeId {
        ScopeId(self.scopes.len() - 1)
    }

    /// The innermost open scope.
    #[must_use]
    pub fn current(&self) -> &Scope {
        self.scope(self.current_id())
    }

    /// Gets an open scope by id.
    #[must_use]
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    /// Opens a scope nested in the current one, one level deeper.
    pub fn enter(&mut self, name: &str) -> ScopeId {
        let parent = self.current_id();
        let level = self.current().level + 1;
        self.scopes.push(Scope { name: name.to_string(),
                                 level,
                                 parent: Some(parent),
                                 symbols: IndexMap::new() });
        self.current_id()
    }

    /// Closes the current scope and hands it back. The global scope cannot be
    /// closed; `None` is returned instead.
    pub fn leave(&mut self) -> Option<Scope> {
        if self.scopes.len() > 1 {
            self.scopes.pop()
        } else {
            None
        }
    }

    /// Inserts a symbol into the current scope.
    ///
    /// Only the current scope is checked for an existing symbol of the same
    /// name; shadowing a name from an enclosing scope is allowed.
    ///
    /// # Errors
    /// Returns `SemanticError::DuplicateIdentifier` if the current scope
    /// already holds the name.
    pub fn define(&mut self, symbol: Symbol, line: usize) -> Result<(), SemanticError> {
        let id = self.current_id();
        let scope = &mut self.scopes[id.0];
        if scope.symbols.contains_key(symbol.name()) {
            return Err(SemanticError::DuplicateIdentifier { name: symbol.name().to_string(),
                                                            scope: scope.name.clone(),
                                                            line });
        }
        trace!("Define: {symbol} in scope '{}'", scope.name);
        scope.symbols.insert(symbol.name().to_string(), symbol);
        Ok(())
    }

    /// Resolves a name starting at the current scope.
    ///
    /// Searches the current scope and, unless `current_scope_only` is set,
    /// each enclosing scope outward, returning the first match.
    #[must_use]
    pub fn lookup(&self, name: &str, current_scope_only: bool) -> Option<&Symbol> {
        let mut next = Some(self.current_id());
        while let Some(id) = next {
            let scope = self.scope(id);
            trace!("Lookup: {name}. (Scope name: {})", scope.name);
            if let Some(symbol) = scope.get(name) {
                return Some(symbol);
            }
            if current_scope_only {
                return None;
            }
            next = scope.parent;
        }
        None
    }
}
