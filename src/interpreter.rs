/// The environment module implements the lexical scope chain.
///
/// Environments map identifiers to runtime values and link to their
/// enclosing scope. They are shared by every closure created within
/// them, so a scope lives as long as its longest-living holder.
///
/// # Responsibilities
/// - Resolves identifiers innermost-first through the chain.
/// - Stores `let` bindings for the current scope.
/// - Keeps captured scopes alive through shared ownership.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, produces a runtime value for each
/// expression, applies binding side effects for statements, and threads
/// the lexical environment through the walk. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, conditionals, and early returns.
/// - Reports runtime errors such as type mismatches or unbound names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to a meaningful language element such as an
/// integer, identifier, operator, delimiter, or keyword. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens.
/// - Reports unrecognized characters as illegal tokens, not faults.
/// - Keeps producing the end-of-input token once the source runs out.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST representing the syntactic structure of statements
/// and expressions, resolving operator precedence and associativity as
/// it goes.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes via per-token parse rules.
/// - Records descriptive errors for malformed input and keeps parsing.
/// - Resolves precedence with a precedence-climbing expression loop.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares every value a program can evaluate to: integers,
/// the shared boolean and null singletons, return signals, and function
/// values carrying their captured environment.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported variants.
/// - Names value types for error messages.
/// - Renders values into their canonical display text.
pub mod value;
