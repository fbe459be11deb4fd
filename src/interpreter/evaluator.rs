/// Core evaluation dispatch.
///
/// Contains the per-node-kind dispatch for statements and expressions,
/// program evaluation with its return-signal unwrapping, and identifier
/// resolution.
pub mod core;

/// Statement evaluation.
///
/// Implements `let` bindings and `return` signal construction.
pub mod statement;

/// Block evaluation.
///
/// Evaluates brace-delimited statement sequences, forwarding return
/// signals to the enclosing call boundary without unwrapping them.
pub mod block;

/// Prefix operator evaluation.
///
/// Handles the unary operators `!` and `-`.
pub mod unary;

/// Infix operator evaluation.
///
/// Implements integer arithmetic and comparison, plus the identity
/// fallback `==`/`!=` takes for non-integer operands.
pub mod binary;

/// Conditional evaluation.
///
/// Evaluates `if`/`else` expressions and defines the truthiness rule.
pub mod conditional;

/// Function evaluation.
///
/// Builds closure values from function literals and applies calls in a
/// fresh enclosed environment.
pub mod function;
