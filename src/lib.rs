//! # pascalina
//!
//! pascalina is an interpreter for a small Pascal-like language written in
//! Rust. A program passes through four stages: the lexer turns text into
//! tokens, the parser builds a tree, the semantic analyzer checks scopes and
//! declarations, and the evaluator walks the tree and stores the values it
//! computes.
//!
//! ```
//! use pascalina::{interpreter::value::Value, run_program};
//!
//! let outcome = run_program("program p; var a, b: integer; begin a := 2; b := 10 * a + 10 * a div 4 end.")
//!     .unwrap();
//!
//! assert_eq!(outcome.result, Some(Value::Integer(25)));
//! assert_eq!(outcome.variables["a"], Value::Integer(2));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::BTreeMap;

use log::debug;

use crate::{
    error::Error,
    interpreter::{
        analyzer::core::SemanticAnalyzer,
        evaluator::{core::Context, environment::Environment},
        lexer::tokenize,
        parser::core::{parse, parse_bare_expression},
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the program, declaration, statement and expression
/// types that represent source code as a tree. The tree is built by the
/// parser, checked by the analyzer and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for every language construct.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for every pass.
///
/// This module defines the errors raised while lexing, parsing, analyzing or
/// evaluating code, and the [`error::Error`] type that wraps them.
///
/// # Responsibilities
/// - Defines one error enum per pass.
/// - Attaches line (and where known, column) numbers for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, analysis, evaluation and value
/// representation.
pub mod interpreter;
/// General utilities for numeric conversion.
pub mod util;

/// The observable result of running a program.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The value stored by the last assignment executed, if any.
    pub result:    Option<Value>,
    /// Every variable holding a value at the end of the run, by name.
    pub variables: BTreeMap<String, Value>,
}

/// Runs a complete program through every pass.
///
/// Each call starts from a fresh scope chain and an empty variable store.
///
/// # Errors
/// Returns the first error raised by any pass. Nothing is evaluated unless
/// lexing, parsing and analysis all succeed.
///
/// # Examples
/// ```
/// use pascalina::{error::ErrorCategory, run_program};
///
/// let outcome = run_program("program p; var x: real; begin x := 10 / 4 end.").unwrap();
/// assert_eq!(outcome.variables.len(), 1);
///
/// // 'y' is never declared.
/// let err = run_program("program p; var x: integer; begin x := y end.").unwrap_err();
/// assert_eq!(err.category(), ErrorCategory::Semantic);
/// ```
pub fn run_program(source: &str) -> Result<Outcome, Error> {
    let tokens = tokenize(source)?;
    debug!("lexed {} tokens", tokens.len());

    let program = parse(&tokens)?;
    SemanticAnalyzer::new().analyze_program(&program)?;

    let mut context = Context::new(Environment::new());
    let result = context.eval_program(&program)?;

    Ok(Outcome { result,
                 variables: context.into_environment().into_snapshot() })
}

/// Evaluates a bare arithmetic expression.
///
/// The expression is checked against an empty global scope, so any variable
/// reference is rejected.
///
/// # Errors
/// Returns the first error raised by any pass.
///
/// # Examples
/// ```
/// use pascalina::{evaluate_expression, interpreter::value::Value};
///
/// assert_eq!(evaluate_expression("7 div 2").unwrap(), Value::Integer(3));
/// assert_eq!(evaluate_expression("- - 3.5").unwrap(), Value::Real(3.5));
/// ```
pub fn evaluate_expression(source: &str) -> Result<Value, Error> {
    let tokens = tokenize(source)?;
    let expr = parse_bare_expression(&tokens)?;
    SemanticAnalyzer::new().analyze_expression(&expr)?;

    let context = Context::new(Environment::new());
    Ok(context.eval(&expr)?)
}
