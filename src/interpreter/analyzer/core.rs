use log::debug;

use crate::{
    ast::{Block, Compound, Declaration, Expr, ProcDecl, Program, Statement, TypeSpec, VarDecl,
          VariableRef},
    error::SemanticError,
    interpreter::analyzer::{
        scope::ScopeTree,
        symbol::{BuiltinType, ProcSymbol, Symbol, VarSymbol},
    },
};

/// Result type used by the semantic analyzer.
pub type AnalysisResult<T> = Result<T, SemanticError>;

/// Name of the outermost scope.
pub const GLOBAL_SCOPE: &str = "global";

/// Validates declarations and references in a parsed tree.
///
/// The analyzer mirrors the order in which the evaluator will later walk the
/// tree, but performs no arithmetic. It owns the chain of open scopes; each
/// procedure's scope is dropped once its block has been checked.
#[derive(Debug)]
pub struct SemanticAnalyzer {
    scopes: ScopeTree,
}

#[allow(clippy::new_without_default)]
impl SemanticAnalyzer {
    /// Creates an analyzer whose global scope holds the builtin types
    /// `integer` and `real`.
    #[must_use]
    pub fn new() -> Self {
        let builtins = ["integer", "real"].map(|name| BuiltinType { name: name.to_string() })
                                           .map(Symbol::BuiltinType);
        Self { scopes: ScopeTree::with_builtins(GLOBAL_SCOPE, builtins) }
    }

    /// The chain of scopes currently open.
    #[must_use]
    pub const fn scopes(&self) -> &ScopeTree {
        &self.scopes
    }

    /// Checks a whole program.
    ///
    /// # Errors
    /// Returns the first `SemanticError` found; analysis stops there.
    ///
    /// # Example
    /// ```
    /// use pascalina::interpreter::{
    ///     analyzer::core::SemanticAnalyzer, lexer::tokenize, parser::core::parse,
    /// };
    ///
    /// let tokens = tokenize("program p; var x: integer; begin x := 1 end.").unwrap();
    /// let program = parse(&tokens).unwrap();
    ///
    /// assert!(SemanticAnalyzer::new().analyze_program(&program).is_ok());
    /// ```
    pub fn analyze_program(&mut self, program: &Program) -> AnalysisResult<()> {
        debug!("Enter scope: {GLOBAL_SCOPE}");
        self.visit_block(&program.block)?;
        debug!("Leave scope: {GLOBAL_SCOPE}\n{}", self.scopes.current());
        Ok(())
    }

    /// Checks a bare expression against the current scope chain.
    ///
    /// # Errors
    /// Returns `SemanticError::UndeclaredIdentifier` for the first variable
    /// that does not resolve.
    pub fn analyze_expression(&self, expr: &Expr) -> AnalysisResult<()> {
        self.visit_expr(expr)
    }

    fn visit_block(&mut self, block: &Block) -> AnalysisResult<()> {
        for declaration in &block.declarations {
            match declaration {
                Declaration::Variable(decl) => self.visit_var_decl(decl)?,
                Declaration::Procedure(decl) => self.visit_proc_decl(decl)?,
            }
        }
        self.visit_compound(&block.compound)
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) -> AnalysisResult<()> {
        let ty = self.resolve_type(decl.type_spec)?;
        self.scopes.define(Symbol::Variable(VarSymbol { name: decl.name.clone(),
                                                        ty }),
                           decl.line)
    }

    /// Declares the procedure in the enclosing scope, then checks its
    /// parameters and block in a scope of its own.
    fn visit_proc_decl(&mut self, decl: &ProcDecl) -> AnalysisResult<()> {
        let params = decl.params
                         .iter()
                         .map(|param| -> AnalysisResult<VarSymbol> {
                             Ok(VarSymbol { name: param.name.clone(),
                                            ty:   self.resolve_type(param.type_spec)?, })
                         })
                         .collect::<AnalysisResult<Vec<_>>>()?;

        self.scopes.define(Symbol::Procedure(ProcSymbol { name:   decl.name.clone(),
                                                          params: params.clone(), }),
                           decl.line)?;

        self.scopes.enter(&decl.name);
        debug!("Enter scope: {}", decl.name);

        let checked = params.into_iter()
                            .zip(&decl.params)
                            .try_for_each(|(symbol, param)| {
                                self.scopes.define(Symbol::Variable(symbol), param.line)
                            })
                            .and_then(|()| self.visit_block(&decl.block));

        if let Some(scope) = self.scopes.leave() {
            debug!("Leave scope: {}\n{scope}", decl.name);
        }
        checked
    }

    fn visit_compound(&self, compound: &Compound) -> AnalysisResult<()> {
        compound.children
                .iter()
                .try_for_each(|statement| self.visit_statement(statement))
    }

    fn visit_statement(&self, statement: &Statement) -> AnalysisResult<()> {
        match statement {
            Statement::Compound(compound) => self.visit_compound(compound),
            Statement::Assign { target, value, .. } => {
                self.resolve_variable(target)?;
                self.visit_expr(value)
            },
            Statement::NoOp => Ok(()),
        }
    }

    fn visit_expr(&self, expr: &Expr) -> AnalysisResult<()> {
        match expr {
            Expr::Literal { .. } => Ok(()),
            Expr::Variable(var) => self.resolve_variable(var),
            Expr::UnaryOp { expr, .. } => self.visit_expr(expr),
            Expr::BinaryOp { left, right, .. } => {
                self.visit_expr(left)?;
                self.visit_expr(right)
            },
        }
    }

    /// Requires a variable read or assignment target to be visible and to
    /// name a variable.
    fn resolve_variable(&self, var: &VariableRef) -> AnalysisResult<()> {
        match self.scopes.lookup(&var.name, false) {
            Some(Symbol::Variable(_)) => Ok(()),
            Some(_) => Err(SemanticError::NotAVariable { name: var.name.clone(),
                                                         line: var.line, }),
            None => Err(SemanticError::UndeclaredIdentifier { name: var.name.clone(),
                                                              line: var.line, }),
        }
    }

    fn resolve_type(&self, type_spec: TypeSpec) -> AnalysisResult<BuiltinType> {
        let name = type_spec.name.as_str();
        self.scopes
            .lookup(name, false)
            .and_then(Symbol::as_builtin_type)
            .cloned()
            .ok_or_else(|| SemanticError::UnknownType { name: name.to_string(),
                                                        line: type_spec.line, })
    }
}

/// Checks a whole program with a fresh analyzer.
///
/// # Errors
/// Returns the first `SemanticError` found.
pub fn analyze(program: &Program) -> AnalysisResult<()> {
    SemanticAnalyzer::new().analyze_program(program)
}
