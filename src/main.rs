use std::process::ExitCode;

use calcline::{evaluate, parse};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calcline evaluates a single arithmetic expression and prints the result.
///
/// Supported: integer and real literals, `+ - * / % ^`, unary `+`/`-` and
/// parentheses. Whitespace is not allowed inside the expression.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the fully parenthesized parse tree to stderr before the result.
    #[arg(short, long)]
    tree: bool,

    /// Enables debug logging. `RUST_LOG` takes precedence when set.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate, for example `2^10-1` or `-(3.5*2)`.
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let expr = match parse(&args.expression) {
        Ok(expr) => expr,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    if args.tree {
        eprintln!("{expr}");
    }

    match evaluate(&expr) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
