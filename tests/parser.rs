use lemur::{
    ast::{Expr, Program, Statement},
    interpreter::{lexer::Lexer, parser::core::Parser},
};

fn parse(source: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(),
            "unexpected parse errors for {source:?}: {:?}",
            parser.errors());
    program
}

fn parse_errors(source: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse_program();
    parser.errors().to_vec()
}

#[test]
fn let_statements() {
    let program = parse("let x = 5;\nlet y = 10;\nlet foobar = 838383;");
    assert_eq!(program.statements.len(), 3);

    let expected = ["x", "y", "foobar"];
    for (statement, expected_name) in program.statements.iter().zip(expected) {
        assert_eq!(statement.token_literal(), "let");
        let Statement::Let { name, .. } = statement else {
            panic!("expected a let statement, got {statement}");
        };
        assert_eq!(name, expected_name);
    }
}

#[test]
fn let_statement_errors_accumulate() {
    let errors = parse_errors("let x 5;");
    assert!(!errors.is_empty());
    assert!(errors.contains(&"expected next token to be =, got INT instead".to_string()),
            "recorded errors: {errors:?}");

    let errors = parse_errors("let = 10;");
    assert!(errors.contains(&"expected next token to be IDENT, got = instead".to_string()),
            "recorded errors: {errors:?}");

    // One call surfaces several independent errors.
    let errors = parse_errors("let x 5; let = 10;");
    assert!(errors.len() >= 2, "recorded errors: {errors:?}");
}

#[test]
fn return_statements() {
    let program = parse("return 5;\nreturn 10;\nreturn 993322;");
    assert_eq!(program.statements.len(), 3);

    for statement in &program.statements {
        assert_eq!(statement.token_literal(), "return");
        assert!(matches!(statement, Statement::Return { value: Some(_) }));
    }

    let program = parse("return;");
    assert_eq!(program.statements, vec![Statement::Return { value: None }]);
}

#[test]
fn identifier_expression() {
    let program = parse("foobar;");
    assert_eq!(program.statements,
               vec![Statement::Expression { expr: Expr::Identifier { name: "foobar".to_string() } }]);
}

#[test]
fn integer_literal_expression() {
    let program = parse("5;");
    assert_eq!(program.statements,
               vec![Statement::Expression { expr: Expr::IntegerLiteral { value: 5 } }]);
}

#[test]
fn oversized_integer_literal_is_an_error() {
    let errors = parse_errors("92233720368547758079");
    assert_eq!(errors,
               vec!["could not parse \"92233720368547758079\" as integer".to_string()]);
}

#[test]
fn string_literal_expression() {
    let program = parse("\"hello world\";");
    assert_eq!(program.statements,
               vec![Statement::Expression { expr: Expr::StringLiteral { value:
                                                                            "hello world".to_string() } }]);
}

#[test]
fn boolean_literal_expressions() {
    let program = parse("true; false;");
    assert_eq!(program.statements,
               vec![Statement::Expression { expr: Expr::BooleanLiteral { value: true } },
                    Statement::Expression { expr: Expr::BooleanLiteral { value: false } }]);
}

#[test]
fn prefix_expressions() {
    let cases = [("!5;", "!", 5), ("-15;", "-", 15)];

    for (source, expected_operator, expected_value) in cases {
        let program = parse(source);
        let [Statement::Expression { expr: Expr::Prefix { operator, operand } }] =
            program.statements.as_slice()
        else {
            panic!("expected one prefix expression for {source:?}");
        };
        assert_eq!(operator, expected_operator);
        assert_eq!(**operand, Expr::IntegerLiteral { value: expected_value });
    }
}

#[test]
fn infix_expressions() {
    let operators = ["+", "-", "*", "/", ">", "<", "==", "!="];

    for operator in operators {
        let source = format!("5 {operator} 5;");
        let program = parse(&source);
        assert_eq!(program.to_string(), format!("(5 {operator} 5)"));
    }
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("false", "false"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("3 < 5 == true", "((3 < 5) == true)")];

    for (source, expected) in cases {
        assert_eq!(parse(source).to_string(), expected, "source: {source:?}");
    }
}

#[test]
fn explicit_grouping_overrides_precedence() {
    let cases = [("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))")];

    for (source, expected) in cases {
        assert_eq!(parse(source).to_string(), expected, "source: {source:?}");
    }
}

#[test]
fn call_expressions_bind_tighter_than_operators() {
    let cases = [("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))")];

    for (source, expected) in cases {
        assert_eq!(parse(source).to_string(), expected, "source: {source:?}");
    }
}

#[test]
fn if_expression() {
    let program = parse("if (x < y) { x }");
    let [Statement::Expression { expr: Expr::If { condition,
                                                  consequence,
                                                  alternative, }, }] =
        program.statements.as_slice()
    else {
        panic!("expected one if expression");
    };

    assert_eq!(condition.to_string(), "(x < y)");
    assert_eq!(consequence.to_string(), "x");
    assert!(alternative.is_none());
}

#[test]
fn if_else_expression() {
    let program = parse("if (x < y) { x } else { y }");
    let [Statement::Expression { expr: Expr::If { alternative, .. } }] =
        program.statements.as_slice()
    else {
        panic!("expected one if expression");
    };

    assert_eq!(alternative.as_ref().map(ToString::to_string), Some("y".to_string()));
}

#[test]
fn function_literal() {
    let program = parse("fn(x, y) { x + y; }");
    let [Statement::Expression { expr: Expr::FunctionLiteral { parameters, body } }] =
        program.statements.as_slice()
    else {
        panic!("expected one function literal");
    };

    assert_eq!(parameters, &["x".to_string(), "y".to_string()]);
    assert_eq!(body.to_string(), "(x + y)");
}

#[test]
fn function_parameter_lists() {
    let cases: [(&str, &[&str]); 3] =
        [("fn() {};", &[]), ("fn(x) {};", &["x"]), ("fn(x, y, z) {};", &["x", "y", "z"])];

    for (source, expected) in cases {
        let program = parse(source);
        let [Statement::Expression { expr: Expr::FunctionLiteral { parameters, .. } }] =
            program.statements.as_slice()
        else {
            panic!("expected one function literal for {source:?}");
        };
        assert_eq!(parameters, expected, "source: {source:?}");
    }
}

#[test]
fn call_expression() {
    let program = parse("add(1, 2 * 3, 4 + 5);");
    let [Statement::Expression { expr: Expr::Call { callee, arguments } }] =
        program.statements.as_slice()
    else {
        panic!("expected one call expression");
    };

    assert_eq!(callee.to_string(), "add");
    assert_eq!(arguments.len(), 3);
    assert_eq!(arguments[1].to_string(), "(2 * 3)");
}

#[test]
fn let_with_function_value_needs_no_semicolon() {
    for source in ["let f = fn(x) { x }", "let f = fn(x) { x };"] {
        let program = parse(source);
        assert_eq!(program.statements.len(), 1, "source: {source:?}");
        assert!(matches!(&program.statements[0],
                         Statement::Let { value: Expr::FunctionLiteral { .. }, .. }));
    }
}

#[test]
fn missing_prefix_rule_is_recorded() {
    let errors = parse_errors("let x = ;");
    assert_eq!(errors, vec!["no prefix parse function for ; found".to_string()]);

    let errors = parse_errors("@");
    assert_eq!(errors, vec!["no prefix parse function for ILLEGAL found".to_string()]);
}

#[test]
fn unclosed_group_is_recorded() {
    let errors = parse_errors("(1 + 2;");
    assert!(errors.contains(&"expected next token to be ), got ; instead".to_string()),
            "recorded errors: {errors:?}");
}

#[test]
fn rendering_is_canonical_and_reparses_to_itself() {
    let rendered = parse("let x = 1 + 2 * 3;").to_string();
    assert_eq!(rendered, "let x = (1 + (2 * 3));");
    assert_eq!(parse(&rendered).to_string(), rendered);
}

#[test]
fn hand_built_tree_renders_as_source() {
    let program =
        Program { statements: vec![Statement::Let { name:  "myVar".to_string(),
                                                    value: Expr::Identifier { name:
                                                                                  "anotherVar".to_string() }, }], };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}
