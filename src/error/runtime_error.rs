#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// A runtime error short-circuits every composite evaluation rule on its
/// way out: operator operands, call arguments, block statements. There is
/// no catch construct in the language, so once produced an error is the
/// final result of the program that raised it.
pub enum RuntimeError {
    /// A binary operator was applied to operands of two different types.
    TypeMismatch {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator's literal text.
        operator: String,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// A prefix operator was applied to an operand it is not defined for.
    UnknownPrefixOperator {
        /// The operator's literal text.
        operator: String,
        /// Type name of the operand.
        operand:  &'static str,
    },
    /// A binary operator was applied to same-typed operands it is not
    /// defined for.
    UnknownInfixOperator {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator's literal text.
        operator: String,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// Tried to use an unbound identifier.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// Tried to call a value that is not a function.
    NotAFunction {
        /// Type name of the value that was called.
        kind: &'static str,
    },
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, operator, right } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::UnknownInfixOperator { left, operator, right } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
