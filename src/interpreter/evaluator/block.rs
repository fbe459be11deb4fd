use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::BlockStatement,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, eval_statement},
        value::Value,
    },
};

/// Evaluates the statements of a block in order.
///
/// A return signal stops the block early but is *not* unwrapped here;
/// it keeps its wrapper so it can pass up through arbitrarily nested
/// blocks until a function-call boundary (or the program root) unwraps
/// it. Errors short-circuit the same way via the result type.
pub fn eval_block_statement(block: &BlockStatement,
                            env: &Rc<RefCell<Environment>>)
                            -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Some(Value::Return(_))) {
            return Ok(result);
        }
    }

    Ok(result)
}
