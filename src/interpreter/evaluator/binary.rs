use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{Value, native_bool},
    },
};

/// Evaluates a binary operator applied to already-evaluated operands.
///
/// Two integers dispatch to integer arithmetic and comparison. For
/// anything else, `==` and `!=` fall back to identity comparison of the
/// two values, valid because booleans and null are singletons. Any other
/// combination is an error: a type mismatch when the operand types
/// differ, an unknown operator otherwise.
///
/// An operand that defined no value makes the whole expression define
/// none either.
pub fn eval_infix_expression(operator: &str,
                             left: Option<Value>,
                             right: Option<Value>)
                             -> EvalResult<Option<Value>> {
    let (Some(left), Some(right)) = (left, right) else {
        return Ok(None);
    };

    match (left, right) {
        (Value::Integer(left), Value::Integer(right)) => {
            eval_integer_infix_expression(operator, left, right).map(Some)
        },
        (left, right) => match operator {
            "==" => Ok(Some(native_bool(left == right))),
            "!=" => Ok(Some(native_bool(left != right))),
            _ if left.type_name() != right.type_name() => {
                Err(RuntimeError::TypeMismatch { left:     left.type_name(),
                                                 operator: operator.to_string(),
                                                 right:    right.type_name(), })
            },
            _ => Err(RuntimeError::UnknownInfixOperator { left:     left.type_name(),
                                                          operator: operator.to_string(),
                                                          right:    right.type_name(), }),
        },
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic wraps on overflow; division by zero is an error rather
/// than a fault.
fn eval_integer_infix_expression(operator: &str, left: i64, right: i64) -> EvalResult<Value> {
    match operator {
        "+" => Ok(Value::Integer(left.wrapping_add(right))),
        "-" => Ok(Value::Integer(left.wrapping_sub(right))),
        "*" => Ok(Value::Integer(left.wrapping_mul(right))),
        "/" => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Integer(left.wrapping_div(right)))
            }
        },
        "<" => Ok(native_bool(left < right)),
        ">" => Ok(native_bool(left > right)),
        "==" => Ok(native_bool(left == right)),
        "!=" => Ok(native_bool(left != right)),
        _ => Err(RuntimeError::UnknownInfixOperator { left:     "INTEGER",
                                                      operator: operator.to_string(),
                                                      right:    "INTEGER", }),
    }
}
