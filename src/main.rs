use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use ferrocalc::{EvaluationError, eval, evaluate, parse, tokenize, util::num::format_result};

/// ferrocalc evaluates arithmetic expressions with `+ - * / % ^` and
/// parentheses. Without arguments it starts an interactive shell.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as a path and evaluate every non-blank line of the file.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Print the parsed tree of each expression before its result.
    #[arg(long)]
    show_ast: bool,

    /// Log every pipeline stage at debug level. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// An expression to evaluate once, or a file path with `--file`.
    contents: Option<String>,
}

const NOT_FINITE: &str = "result is not a finite number";

const BANNER: &str = "
=== ferrocalc ===
Supported operators:
  + : Addition
  - : Subtraction
  * : Multiplication
  / : Division
  % : Modulo
  ^ : Power
  ( ) : Parentheses for grouping
Type 'quit' to exit
";

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            run_script(&script, args.show_ast)
        },
        Some(expression) => match evaluate_line(&expression, args.show_ast) {
            Ok(value) => match format_result(value) {
                Some(text) => {
                    println!("{text}");
                    ExitCode::SUCCESS
                },
                None => {
                    eprintln!("Error: {NOT_FINITE}");
                    ExitCode::FAILURE
                },
            },
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
        },
        None => match run_shell(args.show_ast) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to read from standard input: {e}");
                ExitCode::FAILURE
            },
        },
    }
}

/// Evaluates one expression, printing its tree first when asked to.
fn evaluate_line(line: &str, show_ast: bool) -> Result<f64, EvaluationError> {
    if !show_ast {
        return evaluate(line);
    }
    let ast = parse(&tokenize(line)?)?;
    println!("AST: {ast}");
    Ok(eval(&ast)?)
}

/// Prints the outcome of one expression in shell format. Returns whether it
/// succeeded.
fn report(line: &str, show_ast: bool) -> bool {
    match evaluate_line(line, show_ast).map(format_result) {
        Ok(Some(text)) => {
            println!("Result: {text}");
            true
        },
        Ok(None) => {
            println!("Error: {NOT_FINITE}");
            false
        },
        Err(e) => {
            println!("Error: {e}");
            false
        },
    }
}

/// Evaluates each non-blank line of a script. Fails if any line failed.
fn run_script(script: &str, show_ast: bool) -> ExitCode {
    let mut failures = 0usize;
    for line in script.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if !report(line, show_ast) {
            failures += 1;
        }
    }

    if failures > 0 {
        log::warn!("{failures} expression(s) failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Runs the interactive shell until `quit` or end of input.
fn run_shell(show_ast: bool) -> io::Result<()> {
    println!("{BANNER}");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("Enter expression: ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            println!("Goodbye!");
            return Ok(());
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") {
            println!("Goodbye!");
            return Ok(());
        }
        if input.is_empty() {
            continue;
        }

        report(input, show_ast);
    }
}
