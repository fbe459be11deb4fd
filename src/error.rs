/// Parse failures.
///
/// Defines the error type that carries the parser's accumulated error
/// messages across the library boundary. The parser itself never aborts;
/// it records every problem it finds and keeps going, and the full list is
/// wrapped up here for callers that want a single `Result`.
pub mod parse_failure;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, unknown operators, unbound identifiers,
/// calls to non-functions, and division by zero.
pub mod runtime_error;

pub use parse_failure::ParseFailure;
pub use runtime_error::RuntimeError;
