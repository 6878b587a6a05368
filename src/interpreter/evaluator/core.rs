use std::collections::HashSet;

use log::trace;

use crate::{
    ast::{Block, Compound, Declaration, Expr, Program, Statement, VariableRef},
    error::RuntimeError,
    interpreter::{evaluator::environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the [`Environment`] it writes to for the length of one
/// run. It expects a tree that has already passed semantic analysis.
///
/// ## Usage
///
/// Create a context around a fresh environment, evaluate a program with
/// [`Context::eval_program`], then take the environment back with
/// [`Context::into_environment`] to read the final variable values.
#[derive(Debug)]
pub struct Context {
    environment: Environment,
    /// Variables declared in the program block. Used to tell a variable that
    /// was never assigned from one the store cannot know.
    declared:    HashSet<String>,
}

impl Context {
    /// Creates an evaluation context writing to `environment`.
    #[must_use]
    pub fn new(environment: Environment) -> Self {
        Self { environment,
               declared: HashSet::new() }
    }

    /// The store as it currently is.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Ends the run and hands the store back.
    #[must_use]
    pub fn into_environment(self) -> Environment {
        self.environment
    }

    /// Evaluates a program.
    ///
    /// # Returns
    /// The value stored by the last assignment the program executed, or
    /// `None` if it assigned nothing.
    ///
    /// # Example
    /// ```
    /// use pascalina::interpreter::{
    ///     evaluator::{core::Context, environment::Environment},
    ///     lexer::tokenize,
    ///     parser::core::parse,
    ///     value::Value,
    /// };
    ///
    /// let tokens = tokenize("program p; var x: integer; begin x := 7 div 2 end.").unwrap();
    /// let program = parse(&tokens).unwrap();
    ///
    /// let mut context = Context::new(Environment::new());
    /// let result = context.eval_program(&program).unwrap();
    ///
    /// assert_eq!(result, Some(Value::Integer(3)));
    /// assert_eq!(context.environment().get("x"), Some(Value::Integer(3)));
    /// ```
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Option<Value>> {
        trace!("evaluating program '{}'", program.name);
        self.eval_block(&program.block)
    }

    /// Evaluates a block.
    ///
    /// Declarations have no runtime effect beyond noting which variable
    /// names exist. Procedure bodies are never entered.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult<Option<Value>> {
        for declaration in &block.declarations {
            match declaration {
                Declaration::Variable(decl) => {
                    self.declared.insert(decl.name.clone());
                },
                Declaration::Procedure(decl) => {
                    trace!("skipping body of procedure '{}'", decl.name);
                },
            }
        }
        self.eval_compound(&block.compound)
    }

    fn eval_compound(&mut self, compound: &Compound) -> EvalResult<Option<Value>> {
        let mut result = None;
        for statement in &compound.children {
            if let Some(value) = self.eval_statement(statement)? {
                result = Some(value);
            }
        }
        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// # Returns
    /// `Some(Value)` for statements that store a value, or `None` when no
    /// value is produced.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Compound(compound) => self.eval_compound(compound),
            Statement::Assign { target, value, .. } => {
                let value = self.eval(value)?;
                trace!("assign {} := {value}", target.name);
                self.environment.assign(&target.name, value);
                Ok(Some(value))
            },
            Statement::NoOp => Ok(None),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Both operands of a binary operator are always evaluated, left first.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok((*value).into()),
            Expr::Variable(var) => self.eval_variable(var),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *line)
            },
        }
    }

    fn eval_variable(&self, var: &VariableRef) -> EvalResult<Value> {
        if let Some(value) = self.environment.get(&var.name) {
            return Ok(value);
        }
        if self.declared.contains(&var.name) {
            Err(RuntimeError::UnassignedVariable { name: var.name.clone(),
                                                   line: var.line, })
        } else {
            Err(RuntimeError::UnknownVariable { name: var.name.clone(),
                                                line: var.line, })
        }
    }
}
