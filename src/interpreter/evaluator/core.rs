use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        value::{Value, native_bool},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a result of type `T` or a
/// [`RuntimeError`] describing the failure. Errors short-circuit every
/// composite rule on their way out; `Ok(None)` means the node defines no
/// value at all, which is distinct from evaluating to null.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program against the given environment.
///
/// Statements run in order. A `return` signal produced by any of them is
/// unwrapped here and ends the program early; an error propagates out of
/// the whole program and becomes its final observable result.
///
/// # Parameters
/// - `program`: The parsed program to run.
/// - `env`: The environment bindings accumulate in. A shell passes the
///   same environment for every line of a session.
///
/// # Returns
/// The last statement's value, the unwrapped early return, or `None` when
/// no statement produced a value.
pub fn eval_program(program: &Program, env: &Rc<RefCell<Environment>>) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &program.statements {
        result = eval_statement(statement, env)?;

        if let Some(Value::Return(value)) = result {
            return Ok(Some(*value));
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
pub fn eval_statement(statement: &Statement,
                      env: &Rc<RefCell<Environment>>)
                      -> EvalResult<Option<Value>> {
    match statement {
        Statement::Let { name, value } => super::statement::eval_let_statement(name, value, env),
        Statement::Return { value } => {
            super::statement::eval_return_statement(value.as_ref(), env)
        },
        Statement::Expression { expr } => eval_expression(expr, env),
    }
}

/// Evaluates a single expression.
///
/// This is the closed dispatch over every expression kind; each arm hands
/// off to the module implementing that construct. String literals have no
/// runtime representation and yield no value.
pub fn eval_expression(expr: &Expr, env: &Rc<RefCell<Environment>>) -> EvalResult<Option<Value>> {
    match expr {
        Expr::IntegerLiteral { value } => Ok(Some(Value::Integer(*value))),
        Expr::BooleanLiteral { value } => Ok(Some(native_bool(*value))),
        Expr::StringLiteral { .. } => Ok(None),
        Expr::Identifier { name } => eval_identifier(name, env),
        Expr::Prefix { operator, operand } => {
            let operand = eval_expression(operand, env)?;
            super::unary::eval_prefix_expression(operator, operand)
        },
        Expr::Infix { left, operator, right } => {
            // Operand evaluation order is right before left: `a + b` with
            // both unbound reports `b`.
            let right = eval_expression(right, env)?;
            let left = eval_expression(left, env)?;
            super::binary::eval_infix_expression(operator, left, right)
        },
        Expr::If { condition,
                   consequence,
                   alternative, } => {
            super::conditional::eval_if_expression(condition, consequence, alternative.as_ref(), env)
        },
        Expr::FunctionLiteral { parameters, body } => {
            super::function::eval_function_literal(parameters, body, env)
        },
        Expr::Call { callee, arguments } => {
            super::function::eval_call_expression(callee, arguments, env)
        },
    }
}

/// Resolves an identifier through the environment chain.
fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> EvalResult<Option<Value>> {
    match env.borrow().get(name) {
        Some(value) => Ok(Some(value)),
        None => Err(RuntimeError::IdentifierNotFound { name: name.to_string() }),
    }
}
