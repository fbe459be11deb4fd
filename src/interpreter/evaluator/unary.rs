use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{TRUE, Value, native_bool},
    },
};

/// Evaluates a prefix operator applied to an already-evaluated operand.
///
/// # Parameters
/// - `operator`: The operator's literal text, `!` or `-`.
/// - `operand`: The operand's value, or `None` when the operand expression
///   defined no value, in which case the whole expression defines none
///   either.
pub fn eval_prefix_expression(operator: &str, operand: Option<Value>) -> EvalResult<Option<Value>> {
    let Some(operand) = operand else {
        return Ok(None);
    };

    match operator {
        "!" => Ok(Some(eval_bang(&operand))),
        "-" => eval_negate(operand).map(Some),
        _ => Err(RuntimeError::UnknownPrefixOperator { operator: operator.to_string(),
                                                       operand:  operand.type_name(), }),
    }
}

/// Logical negation with the truthy-negation extension for integers:
/// `!0` is true, `!n` is false for nonzero `n`, `!null` is true, and any
/// other value negates to false.
fn eval_bang(operand: &Value) -> Value {
    match operand {
        Value::Boolean(value) => native_bool(!value),
        Value::Integer(value) => native_bool(*value == 0),
        Value::Null => TRUE,
        _ => native_bool(false),
    }
}

/// Arithmetic negation; defined for integers only.
fn eval_negate(operand: Value) -> EvalResult<Value> {
    match operand {
        Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
        other => Err(RuntimeError::UnknownPrefixOperator { operator: "-".to_string(),
                                                          operand:  other.type_name(), }),
    }
}
