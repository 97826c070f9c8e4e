use std::{fs, process};

use clap::Parser;
use glint::{
    Interpreter, Value, Variable,
    interpreter::lexer::{scanner::scan, token::TokenKind},
};

/// glint evaluates a single expression and prints its value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells glint to read the expression from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable, e.g. `--var price=12.5`. `true` and `false` become
    /// booleans, anything numeric becomes a number and the rest is text.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_variable)]
    vars: Vec<Variable>,

    /// Prints the scanned tokens instead of evaluating.
    #[arg(long)]
    tokens: bool,

    contents: String,
}

fn parse_variable(binding: &str) -> Result<Variable, String> {
    let (name, raw) = binding.split_once('=')
                             .ok_or_else(|| format!("expected NAME=VALUE, found '{binding}'"))?;
    if name.is_empty() {
        return Err(format!("missing variable name in '{binding}'"));
    }

    let value = match raw {
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        _ => raw.parse::<f64>()
                .map_or_else(|_| Value::from(raw), Value::Number),
    };
    Ok(Variable::new(name, value))
}

/// Installs a `tracing` subscriber on stderr, but only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    if args.tokens {
        for token in scan(&source).iter().filter(|t| t.kind != TokenKind::Eof) {
            println!("{:>4}  {:<24} {:?}", token.offset, format!("{:?}", token.kind), token.lexeme);
        }
        return;
    }

    let interpreter = Interpreter::new(args.vars, Vec::new());
    match interpreter.interpret(&source) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
