use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{BlockStatement, Expr},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            block::eval_block_statement,
            core::{EvalResult, eval_expression},
        },
        value::Value,
    },
};

/// Builds a function value from a function literal.
///
/// The parameters and body are captured together with a shared reference
/// to the environment active at the definition site; nothing is
/// evaluated yet. The capture is what lets the closure's variables
/// outlive the scope that defined them.
pub fn eval_function_literal(parameters: &[String],
                             body: &BlockStatement,
                             env: &Rc<RefCell<Environment>>)
                             -> EvalResult<Option<Value>> {
    Ok(Some(Value::Function { parameters: parameters.to_vec(),
                              body:       body.clone(),
                              env:        Rc::clone(env), }))
}

/// Evaluates a call expression.
///
/// The callee is evaluated first, then each argument left to right; an
/// error in any of them short-circuits the call, discarding the
/// remaining arguments. An argument that defines no value is passed as
/// null.
pub fn eval_call_expression(callee: &Expr,
                            arguments: &[Expr],
                            env: &Rc<RefCell<Environment>>)
                            -> EvalResult<Option<Value>> {
    let Some(function) = eval_expression(callee, env)? else {
        return Ok(None);
    };

    let mut evaluated = Vec::with_capacity(arguments.len());
    for argument in arguments {
        evaluated.push(eval_expression(argument, env)?.unwrap_or(Value::Null));
    }

    apply_function(function, evaluated)
}

/// Applies a function value to already-evaluated arguments.
///
/// A fresh environment is enclosed in the function's *captured*
/// environment, never the caller's. Parameters bind positionally with
/// unchecked arity: extra arguments are ignored, and a missing one
/// surfaces later as an identifier-not-found error inside the body. A
/// return signal produced by the body is unwrapped at this boundary; a
/// body that falls off its last statement yields that statement's value.
fn apply_function(function: Value, arguments: Vec<Value>) -> EvalResult<Option<Value>> {
    let (parameters, body, env) = match function {
        Value::Function { parameters, body, env } => (parameters, body, env),
        other => return Err(RuntimeError::NotAFunction { kind: other.type_name() }),
    };

    let mut call_env = Environment::enclosed(env);
    for (parameter, argument) in parameters.iter().zip(arguments) {
        call_env.set(parameter.clone(), argument);
    }
    let call_env = Rc::new(RefCell::new(call_env));

    let result = eval_block_statement(&body, &call_env)?;
    Ok(match result {
        Some(Value::Return(value)) => Some(*value),
        other => other,
    })
}
