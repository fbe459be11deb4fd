use std::{
    cell::RefCell,
    io::{self, BufRead, Write},
    rc::Rc,
};

use crate::interpreter::{
    environment::Environment,
    evaluator::core::eval_program,
    lexer::Lexer,
    parser::core::Parser,
};

const PROMPT: &str = ">> ";

/// Runs the interactive read-eval-print loop.
///
/// Each line is tokenized, parsed, and evaluated against one persistent
/// environment, so bindings and closures survive across inputs for the
/// whole session. When a line records parse errors they are printed one
/// per line, tab-prefixed, and the line is not evaluated. Otherwise the
/// result's display text (or the runtime error's message) is printed,
/// when there is one.
///
/// Generic over the reader and writer so a session can be driven from a
/// test as easily as from a terminal.
///
/// # Errors
/// Returns an error only when reading or writing the streams fails;
/// malformed input never ends the session.
pub fn start<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let env = Rc::new(RefCell::new(Environment::new()));
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            print_parse_errors(&mut output, parser.errors())?;
            continue;
        }

        match eval_program(&program, &env) {
            Ok(Some(value)) => writeln!(output, "{value}")?,
            Ok(None) => {},
            Err(error) => writeln!(output, "{error}")?,
        }
    }
}

fn print_parse_errors<W: Write>(output: &mut W, errors: &[String]) -> io::Result<()> {
    for message in errors {
        writeln!(output, "\t{message}")?;
    }
    Ok(())
}
