use std::{cell::RefCell, fmt, rc::Rc};

use crate::{ast::BlockStatement, interpreter::environment::Environment};

/// The shared `true` value. All boolean results refer to this constant and
/// [`FALSE`]; no boolean is ever constructed anywhere else.
pub const TRUE: Value = Value::Boolean(true);
/// The shared `false` value.
pub const FALSE: Value = Value::Boolean(false);
/// The shared null value, produced by conditionals with no taken branch.
pub const NULL: Value = Value::Null;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types a program can evaluate to. Comparison
/// with `==`/`!=` inside the language falls back to [`PartialEq`] on this
/// type for non-integer operands, which for the unit-like variants is
/// exactly the identity comparison the shared singletons call for.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A boolean value, always one of the [`TRUE`]/[`FALSE`] singletons.
    Boolean(bool),
    /// The absence of a useful value.
    Null,
    /// Wraps the operand of a `return` statement on its way out to the
    /// nearest function-call boundary. Never observed as a final result.
    Return(Box<Value>),
    /// A function value: parameters, body, and the environment captured at
    /// the definition site, shared rather than copied, which is what gives
    /// closures their semantics.
    Function {
        /// Parameter names, in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body:       BlockStatement,
        /// The defining environment.
        env:        Rc<RefCell<Environment>>,
    },
}

impl Value {
    /// The value's type name as shown in error messages.
    ///
    /// ## Example
    /// ```
    /// use lemur::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(3).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Return(_) => "RETURN_VALUE",
            Self::Function { .. } => "FUNCTION",
        }
    }
}

/// Maps a host boolean onto the shared [`TRUE`]/[`FALSE`] singletons.
#[must_use]
pub const fn native_bool(value: bool) -> Value {
    if value { TRUE } else { FALSE }
}

impl PartialEq for Value {
    /// Integers compare by value; booleans and null are singletons, so
    /// structural equality coincides with identity. Function values have
    /// no stable identity and never compare equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value's canonical display text, as printed by the
    /// shell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Function { parameters, body, .. } => {
                write!(f, "fn({}) {{\n{body}\n}}", parameters.join(", "))
            },
        }
    }
}
