use std::{fs, process::ExitCode};

use clap::Parser;
use multicalc::{Base, EngineContext, EvalError, Mode, evaluate, format_value};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// multicalc evaluates calculator expressions in standard, programmer,
/// statistics, probability, discrete and linear algebra modes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Calculator mode: standard, programmer, statistics, probability,
    /// discrete or linalg.
    #[arg(short, long, default_value = "standard")]
    mode: Mode,

    /// Base for integral results: 2, 8, 10 or 16.
    #[arg(short, long, default_value = "10")]
    base: Base,

    /// Treat the argument as a file and evaluate each non-blank line that does
    /// not start with '#'.
    #[arg(short, long)]
    file: bool,

    /// The expression, or the file path with --file.
    #[arg(required = true)]
    contents: Vec<String>,
}

/// Renders an error for the terminal.
///
/// Errors with a source offset already name the position in their message.
fn error_line(error: &EvalError) -> String {
    format!("Error: {error}")
}

/// Evaluates one expression and prints its result or error.
///
/// Returns `true` on success.
fn run_expression(expression: &str, context: &EngineContext) -> bool {
    match evaluate(expression, context) {
        Ok(value) => {
            println!("{}", format_value(&value, context.base));
            true
        },
        Err(e) => {
            eprintln!("{}", error_line(&e));
            false
        },
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(EnvFilter::from_default_env())
                                  .init();

    let args = Args::parse();
    let context = EngineContext::new(args.mode).with_base(args.base);
    let contents = args.contents.join(" ");

    let all_ok = if args.file {
        let Ok(script) = fs::read_to_string(&contents) else {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            return ExitCode::FAILURE;
        };
        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty() && !line.starts_with('#'))
              .fold(true, |ok, line| run_expression(line, &context) && ok)
    } else {
        run_expression(&contents, &context)
    };

    if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_reported_once() {
        let err = evaluate("1 + $", &EngineContext::default()).unwrap_err();
        assert_eq!(error_line(&err), "Error: Unexpected character '$' at position 4.");

        let err = evaluate("2 * 1e+", &EngineContext::default()).unwrap_err();
        assert_eq!(error_line(&err).matches("position").count(), 1);
    }

    #[test]
    fn errors_without_offsets() {
        let err = evaluate("", &EngineContext::default()).unwrap_err();
        assert_eq!(error_line(&err), "Error: Empty expression.");
        let err = evaluate("5 / 0", &EngineContext::default()).unwrap_err();
        assert!(error_line(&err).starts_with("Error: "));
    }
}
