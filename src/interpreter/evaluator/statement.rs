use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expr,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, eval_expression},
        value::Value,
    },
};

/// Evaluates a `let` statement, binding the name in the current
/// environment.
///
/// The value expression is evaluated first; an error there short-circuits
/// the binding. An expression that defines no value binds nothing.
pub fn eval_let_statement(name: &str,
                          value: &Expr,
                          env: &Rc<RefCell<Environment>>)
                          -> EvalResult<Option<Value>> {
    if let Some(value) = eval_expression(value, env)? {
        env.borrow_mut().set(name.to_string(), value);
    }
    Ok(None)
}

/// Evaluates a `return` statement into a return signal.
///
/// The operand (null for a bare `return;`) is wrapped as
/// [`Value::Return`], which must be unwrapped at the nearest enclosing
/// function-call boundary and is never observed as a final program value.
pub fn eval_return_statement(value: Option<&Expr>,
                             env: &Rc<RefCell<Environment>>)
                             -> EvalResult<Option<Value>> {
    let result = match value {
        Some(expr) => eval_expression(expr, env)?.unwrap_or(Value::Null),
        None => Value::Null,
    };
    Ok(Some(Value::Return(Box::new(result))))
}
