/// Core parsing state and the expression-parsing loop.
///
/// Contains the [`core::Parser`] type with its two tokens of lookahead,
/// the precedence table, and the precedence-climbing algorithm that drives
/// all expression parsing.
pub mod core;

/// Per-token expression parse rules.
///
/// Implements the prefix rules (literals, identifiers, grouping, `if`,
/// function literals, unary operators) and the infix rules (binary
/// operators and calls) the expression loop dispatches to.
pub mod expression;

/// Statement parsing.
///
/// Implements `let`, `return`, bare expression statements, and
/// brace-delimited blocks.
pub mod statement;
