//! Command-line handling shared by the puzzle binaries.
use std::process;

use clap::Parser;
use tracing::{span, Level};
use tracing_subscriber::prelude::*;

use crate::input::{read_input, InputSource, DEFAULT_INPUT};

/// Exit status used when the puzzle input can't be read.
pub const EXIT_INPUT_ERROR: i32 = 2;

#[derive(Debug, Parser)]
pub struct Args {
    /// Input file; use '-' to read standard input.
    #[arg(default_value = DEFAULT_INPUT)]
    pub file: String,
}

impl Args {
    pub fn source(&self) -> InputSource {
        InputSource::from(self.file.as_str())
    }
}

#[test]
fn test_args() {
    let args = Args::try_parse_from(["day01-part1"]).expect("no arguments is fine");
    assert_eq!(args.source(), InputSource::default());
    let args = Args::try_parse_from(["day01-part1", "-"]).expect("'-' is accepted");
    assert_eq!(args.source(), InputSource::Stdin);
    assert!(Args::try_parse_from(["day01-part1", "a", "b"]).is_err());
}

/// Sends log output to stderr, so that stdout carries only the answer.
/// The filter comes from `RUST_LOG` and defaults to "warn".
pub fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))
    {
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

/// Runs one puzzle: reads its input, solves it, and prints the answer.
/// If the input can't be read we exit with `EXIT_INPUT_ERROR`.
pub fn run<T, F>(name: &str, solve: F)
where
    T: std::fmt::Display,
    F: FnOnce(&str) -> T,
{
    let args = Args::parse();
    init_tracing();

    let span = span!(Level::INFO, "solve", puzzle = name, file = %args.file);
    let _enter = span.enter();
    match read_input(&args.source()) {
        Ok(input) => {
            println!("{}", solve(&input));
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(EXIT_INPUT_ERROR);
        }
    }
}
