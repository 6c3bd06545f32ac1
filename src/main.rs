use std::{
    fs,
    io::{self, BufRead},
};

use abaq::{evaluate, format::serialize};
use clap::Parser;
use crossterm::tty::IsTty;

/// abaq evaluates arithmetic expressions: `+ - * /`, parentheses, and signed
/// decimal numbers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells abaq to treat the argument as a file and evaluate each of its
    /// non-blank lines.
    #[arg(short, long, requires = "expression")]
    file: bool,

    /// Disables color decoration of results.
    #[arg(short, long)]
    plain: bool,

    /// The expression to evaluate. When omitted, abaq reads expressions from
    /// standard input, one per line.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();
    let decorate = !args.plain && io::stdout().is_tty();

    match args.expression {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });

            for line in script.lines().filter(|line| !line.trim().is_empty()) {
                println!("{}", serialize(&evaluate(line), decorate));
            }
        },

        Some(expression) => {
            println!("{}", serialize(&evaluate(&expression), decorate));
        },

        None => {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => println!("{}", serialize(&evaluate(&line), decorate)),
                    Err(_) => break,
                }
            }
        },
    }
}
