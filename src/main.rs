use std::{fs, io};

use clap::Parser;
use lemur::run_source;

/// lemur is a small, dynamically typed expression language with
/// first-class functions and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lemur to look at a file instead of inline source text.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the final value of a script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Inline source text, or a path with --file. Omit to start the
    /// interactive shell.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        let stdin = io::stdin();
        if let Err(e) = lemur::repl::start(stdin.lock(), io::stdout()) {
            eprintln!("{e}");
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    match run_source(&script) {
        Ok(Some(value)) if args.pipe_mode => println!("{value}"),
        Ok(_) => {},
        Err(e) => eprintln!("{e}"),
    }
}
