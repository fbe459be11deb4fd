//! # lemur
//!
//! lemur is a small, dynamically typed expression language interpreter
//! written in Rust. It parses and evaluates programs with integer and
//! boolean arithmetic, conditionals, `let` bindings, first-class
//! functions, and closures, either from a script or interactively
//! through a read-eval-print shell.

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

use std::{cell::RefCell, rc::Rc};

use crate::{
    error::ParseFailure,
    interpreter::{
        environment::Environment,
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::core::Parser,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related
/// types that represent the syntactic structure of source code as a
/// tree. The AST is built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Renders nodes back into canonical, explicitly parenthesized source
///   text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the two error channels of the interpreter: parse
/// failures carrying the parser's accumulated messages, and runtime
/// errors raised during evaluation. The channels are never conflated; a
/// program that failed to parse is never evaluated.
///
/// # Responsibilities
/// - Defines the error types for both channels.
/// - Renders the exact messages surfaced to the user.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representation, and the environment chain to provide a complete
/// runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print shell.
///
/// A thin loop gluing the three stages together over line-buffered
/// input, with one persistent environment per session.
pub mod repl;

/// Parses and evaluates a complete source text against a fresh
/// environment.
///
/// Parse errors abort before evaluation and come back wrapped in a
/// [`ParseFailure`]; runtime errors come back as themselves. Both
/// render into the plain-text messages the shell would print.
///
/// # Errors
/// Returns an error if the source fails to parse or evaluation raises a
/// runtime error.
///
/// # Examples
/// ```
/// use lemur::run_source;
///
/// let result = run_source("let x = 2 + 2; x;").unwrap();
/// assert_eq!(result.map(|value| value.to_string()), Some("4".to_string()));
///
/// // An unbound identifier is a runtime error, not a crash.
/// assert!(run_source("let y = x + 1;").is_err());
/// ```
pub fn run_source(source: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(Box::new(ParseFailure::new(parser.errors().to_vec())));
    }

    let env = Rc::new(RefCell::new(Environment::new()));
    Ok(eval_program(&program, &env)?)
}
