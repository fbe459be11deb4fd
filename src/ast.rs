use std::fmt;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all types of expressions, from literals and variables to
/// operators, conditionals, function literals, and calls. Each variant
/// models a distinct syntactic construct. The operator fields hold the
/// operator's literal text, which is also what the evaluator dispatches on.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The constant value.
        value: i64,
    },
    /// A string literal.
    StringLiteral {
        /// The text between the quotes.
        value: String,
    },
    /// A boolean literal value: `true` or `false`.
    BooleanLiteral {
        /// The constant value.
        value: bool,
    },
    /// A prefix operation (`!x` or `-x`).
    Prefix {
        /// The operator's literal text.
        operator: String,
        /// The operand expression.
        operand:  Box<Self>,
    },
    /// A binary operation (addition, comparison, etc.).
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator's literal text.
        operator: String,
        /// Right operand.
        right:    Box<Self>,
    },
    /// Conditional expression with an optional `else` branch.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated when the condition is falsy, if present.
        alternative: Option<BlockStatement>,
    },
    /// Function literal expression (e.g. `fn(x, y) { x + y }`).
    FunctionLiteral {
        /// The parameter names, in declaration order.
        parameters: Vec<String>,
        /// The body of the function.
        body:       BlockStatement,
    },
    /// Function call expression (e.g. `adder(2, 3)`).
    Call {
        /// The expression being called; an identifier or a function literal.
        callee:    Box<Self>,
        /// Arguments to the call, in source order.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Gets the literal text of the token that begins this expression.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Identifier { name } => name.clone(),
            Self::IntegerLiteral { value } => value.to_string(),
            Self::StringLiteral { value } => value.clone(),
            Self::BooleanLiteral { value } => value.to_string(),
            Self::Prefix { operator, .. } | Self::Infix { operator, .. } => operator.clone(),
            Self::If { .. } => "if".to_string(),
            Self::FunctionLiteral { .. } => "fn".to_string(),
            Self::Call { .. } => "(".to_string(),
        }
    }
}

impl fmt::Display for Expr {
    /// Renders the expression in canonical form: operator trees are
    /// parenthesized explicitly, so the rendering makes the parsed
    /// grouping visible.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::IntegerLiteral { value } => write!(f, "{value}"),
            Self::StringLiteral { value } => write!(f, "{value}"),
            Self::BooleanLiteral { value } => write!(f, "{value}"),
            Self::Prefix { operator, operand } => write!(f, "({operator}{operand})"),
            Self::Infix { left, operator, right } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { callee, arguments } => {
                let arguments: Vec<String> = arguments.iter().map(ToString::to_string).collect();
                write!(f, "{callee}({})", arguments.join(", "))
            },
        }
    }
}

/// Represents a top-level statement.
///
/// Statements are the units a [`Program`] is made of.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable binding using `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound value.
        value: Expr,
    },
    /// A `return` statement, with or without an operand.
    Return {
        /// The returned value, if one was written.
        value: Option<Expr>,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

impl Statement {
    /// Gets the literal text of the token that begins this statement.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Let { .. } => "let".to_string(),
            Self::Return { .. } => "return".to_string(),
            Self::Expression { expr } => expr.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value: Some(value) } => write!(f, "return {value};"),
            Self::Return { value: None } => write!(f, "return;"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

/// A brace-delimited sequence of statements.
///
/// Blocks only occur nested: as the consequence or alternative of an `if`
/// expression, or as a function body.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// Statements inside the block, in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// The root of the AST: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Top-level statements, in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Gets the literal text of the first statement's leading token, or the
    /// empty string for an empty program.
    #[must_use]
    pub fn token_literal(&self) -> String {
        self.statements.first().map_or_else(String::new, Statement::token_literal)
    }
}

impl fmt::Display for Program {
    /// Concatenates each statement's rendering with no separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
