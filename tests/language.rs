use std::io::Cursor;

use lemur::{error::ParseFailure, interpreter::value::Value, run_source};

fn eval_integer(source: &str, expected: i64) {
    match run_source(source) {
        Ok(Some(Value::Integer(value))) => assert_eq!(value, expected, "source: {source:?}"),
        other => panic!("expected integer {expected} for {source:?}, got {other:?}"),
    }
}

fn eval_boolean(source: &str, expected: bool) {
    match run_source(source) {
        Ok(Some(Value::Boolean(value))) => assert_eq!(value, expected, "source: {source:?}"),
        other => panic!("expected boolean {expected} for {source:?}, got {other:?}"),
    }
}

fn eval_null(source: &str) {
    match run_source(source) {
        Ok(Some(Value::Null)) => {},
        other => panic!("expected null for {source:?}, got {other:?}"),
    }
}

fn eval_error(source: &str, expected: &str) {
    match run_source(source) {
        Err(error) => assert_eq!(error.to_string(), expected, "source: {source:?}"),
        other => panic!("expected error {expected:?} for {source:?}, got {other:?}"),
    }
}

#[test]
fn integer_arithmetic() {
    eval_integer("5", 5);
    eval_integer("10", 10);
    eval_integer("-5", -5);
    eval_integer("-10", -10);
    eval_integer("5 + 5 + 5 + 5 - 10", 10);
    eval_integer("2 * 2 * 2 * 2 * 2", 32);
    eval_integer("-50 + 100 + -50", 0);
    eval_integer("5 * 2 + 10", 20);
    eval_integer("5 + 2 * 10", 25);
    eval_integer("5 + 5 * 2", 15);
    eval_integer("20 + 2 * -10", 0);
    eval_integer("50 / 2 * 2 + 10", 60);
    eval_integer("2 * (5 + 10)", 30);
    eval_integer("3 * 3 * 3 + 10", 37);
    eval_integer("3 * (3 * 3) + 10", 37);
    eval_integer("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50);
}

#[test]
fn boolean_expressions() {
    eval_boolean("true", true);
    eval_boolean("false", false);
    eval_boolean("1 < 2", true);
    eval_boolean("1 > 2", false);
    eval_boolean("1 == 1", true);
    eval_boolean("1 != 1", false);
    eval_boolean("1 == 2", false);
    eval_boolean("1 != 2", true);
    eval_boolean("true == true", true);
    eval_boolean("false == false", true);
    eval_boolean("true == false", false);
    eval_boolean("true != false", true);
    eval_boolean("(1 < 2) == true", true);
    eval_boolean("(1 > 2) == true", false);
}

#[test]
fn bang_operator() {
    eval_boolean("!true", false);
    eval_boolean("!false", true);
    eval_boolean("!5", false);
    eval_boolean("!0", true);
    eval_boolean("!!true", true);
    eval_boolean("!!5", true);
}

#[test]
fn conditionals() {
    eval_integer("if (true) { 10 }", 10);
    eval_null("if (false) { 10 }");
    eval_integer("if (1) { 10 } else { 20 }", 10);
    eval_null("if (0) { 10 }");
    eval_integer("if (0) { 10 } else { 20 }", 20);
    eval_integer("if (1 < 2) { 10 }", 10);
    eval_integer("if (1 > 2) { 10 } else { 20 }", 20);
}

#[test]
fn null_results_compare_by_identity() {
    eval_boolean("(if (false) { 10 }) == (if (false) { 20 })", true);
    eval_boolean("(if (false) { 10 }) != 5", true);
}

#[test]
fn return_statements() {
    eval_integer("return 10;", 10);
    eval_integer("return 10; 9;", 10);
    eval_integer("return 2 * 5; 9;", 10);
    eval_integer("9; return 2 * 5; 9;", 10);
    eval_null("return;");
}

#[test]
fn return_passes_through_nested_blocks() {
    eval_integer("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10);
}

#[test]
fn runtime_error_messages() {
    eval_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    eval_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    eval_error("-true", "unknown operator: -BOOLEAN");
    eval_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    eval_error("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN");
    eval_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
    eval_error("foobar", "identifier not found: foobar");
    eval_error("5 / 0;", "division by zero");
}

#[test]
fn infix_operands_evaluate_right_to_left() {
    eval_error("foo + bar", "identifier not found: bar");
}

#[test]
fn let_bindings() {
    eval_integer("let a = 5; a;", 5);
    eval_integer("let a = 5 * 5; a;", 25);
    eval_integer("let a = 5; let b = a; b;", 5);
    eval_integer("let a = 5; let b = a; let c = a + b + 5; c;", 15);
}

#[test]
fn function_application() {
    eval_integer("let identity = fn(x) { x; }; identity(5);", 5);
    eval_integer("let identity = fn(x) { return x; }; identity(5);", 5);
    eval_integer("let double = fn(x) { x * 2; }; double(5);", 10);
    eval_integer("let add = fn(x, y) { x + y; }; add(5, 5);", 10);
    eval_integer("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20);
    eval_integer("fn(x) { x; }(5)", 5);
}

#[test]
fn closures_capture_their_defining_scope() {
    eval_integer("let makeAdder = fn(x) { fn(y) { x + y } }; \
                  let addTwo = makeAdder(2); \
                  addTwo(3);",
                 5);
}

#[test]
fn higher_order_functions() {
    eval_integer("let applyTwice = fn(f, x) { f(f(x)) }; \
                  let inc = fn(x) { x + 1 }; \
                  applyTwice(inc, 3);",
                 5);
}

#[test]
fn recursion_through_the_global_binding() {
    eval_integer("let countdown = fn(x) { if (x == 0) { 0 } else { countdown(x - 1) } }; \
                  countdown(3);",
                 0);
}

#[test]
fn arity_is_unchecked() {
    // Extra arguments are silently ignored.
    eval_integer("let first = fn(x) { x; }; first(1, 2);", 1);
    // A missing argument only surfaces when the body reads the parameter.
    eval_error("let second = fn(x, y) { y; }; second(1);", "identifier not found: y");
}

#[test]
fn calling_a_non_function_is_an_error() {
    eval_error("let x = 5; x(1);", "not a function: INTEGER");
}

#[test]
fn function_values_render_their_definition() {
    match run_source("fn(x) { x; }") {
        Ok(Some(value @ Value::Function { .. })) => {
            assert_eq!(value.to_string(), "fn(x) {\nx\n}");
        },
        other => panic!("expected a function value, got {other:?}"),
    }
}

#[test]
fn string_literals_produce_no_value() {
    match run_source("\"hello\";") {
        Ok(None) => {},
        other => panic!("expected no value, got {other:?}"),
    }
}

#[test]
fn parse_failures_are_surfaced_before_evaluation() {
    let error = run_source("let x 5;").expect_err("parsing should fail");
    let failure = error.downcast_ref::<ParseFailure>().expect("expected a parse failure");
    assert_eq!(failure.errors(),
               &["expected next token to be =, got INT instead".to_string()]);
}

#[test]
fn shell_session_keeps_bindings_across_lines() {
    let input = Cursor::new("let x = 5;\nx + 2;\n");
    let mut output = Vec::new();
    lemur::repl::start(input, &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("7\n"), "shell output: {output:?}");
}

#[test]
fn shell_prints_parse_errors_and_skips_evaluation() {
    let input = Cursor::new("let x 5;\n");
    let mut output = Vec::new();
    lemur::repl::start(input, &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("\texpected next token to be =, got INT instead\n"),
            "shell output: {output:?}");
}

#[test]
fn shell_prints_runtime_errors_as_plain_text() {
    let input = Cursor::new("missing;\n");
    let mut output = Vec::new();
    lemur::repl::start(input, &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("identifier not found: missing\n"), "shell output: {output:?}");
}
