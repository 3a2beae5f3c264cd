use std::fs;

use clap::Parser;
use exprbind::{CompiledExpression, Context, Value, compile};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// exprbind evaluates a typed binding expression such as `{0} * 2 + 1` and
/// prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells exprbind to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// A substitution value, written as an expression literal (`3`, `2.5m`,
    /// `"text"`, `true`). Repeat for `{0}`, `{1}`, ...
    #[arg(short, long = "value", value_name = "LITERAL")]
    values: Vec<String>,

    /// Prints the parsed tree, fully parenthesised, instead of evaluating.
    #[arg(short, long)]
    tree: bool,

    contents: String,
}

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, if that is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_writer(std::io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

/// Evaluates each `--value` literal against the empty context.
fn substitution_values(literals: &[String]) -> Result<Vec<Value>, exprbind::Error> {
    literals.iter()
            .map(|literal| exprbind::evaluate(literal, Context::empty()))
            .collect()
}

fn run(args: &Args, source: &str) -> Result<(), exprbind::Error> {
    let expression: CompiledExpression = compile(source)?;
    if args.tree {
        println!("{expression}");
        return Ok(());
    }

    let context = Context::new(substitution_values(&args.values)?);
    let value = expression.evaluate(&context)?;
    println!("{value}");
    Ok(())
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    if let Err(e) = run(&args, source.trim_end()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
