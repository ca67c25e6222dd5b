#[macro_use]
extern crate serde_derive;
extern crate docopt;

use anyhow::{Context, Result};
use docopt::Docopt;
use std::fs::File;
use std::io::{Read, stdin};
use std::process::exit;
use std::time::Duration;

use bfwalk::{Ast, CancelToken, Interpreter, Tape};

const USAGE: &str = "
bfwalk

Usage:
  bfwalk [--timeout=<ms>] <program>
  bfwalk --ast <program>
  bfwalk (-h | --help)

Options:
  -h --help         Show this screen.
  --ast             Display the parsed syntax tree instead of running.
  --timeout=<ms>    Cancel the program after this many milliseconds.
";

#[derive(Debug, Deserialize)]
struct Args {
    arg_program: String,
    flag_ast: bool,
    flag_timeout: Option<u64>,
}

fn main() {
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let program = read_program(&args.arg_program).unwrap_or_else(|e| {
        eprintln!("Error occurred while loading program: {e:#}");
        exit(1)
    });

    if args.flag_ast {
        println!("{program:#?}");
        return;
    }

    let cancel = CancelToken::new();
    if let Some(timeout) = args.flag_timeout {
        cancel.cancel_after(Duration::from_millis(timeout));
    }

    let mut interpreter = Interpreter::new(Tape::default());
    if let Err(e) = interpreter.run(&program, &cancel) {
        eprintln!("Error occurred while running program: {:#}", anyhow::Error::from(e));
        exit(1)
    }
}

/// Read and parse a BrainFuck program's source code.
///
/// When path is "-" this will read from stdin.
fn read_program(path: &str) -> Result<Ast> {
    let source: Box<dyn Read> = if path == "-" {
        Box::new(stdin())
    } else {
        Box::new(File::open(path).with_context(|| format!("Could not open file {path}"))?)
    };

    Ast::parse(source).context("Could not parse program")
}
