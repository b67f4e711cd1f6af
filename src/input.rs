use std::fs;
use std::io::{self, prelude::*};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_INPUT: &str = "input.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl From<&str> for InputSource {
    fn from(s: &str) -> InputSource {
        match s {
            "-" => InputSource::Stdin,
            path => InputSource::File(PathBuf::from(path)),
        }
    }
}

impl Default for InputSource {
    fn default() -> InputSource {
        InputSource::from(DEFAULT_INPUT)
    }
}

#[test]
fn test_input_source_from_str() {
    assert_eq!(InputSource::from("-"), InputSource::Stdin);
    assert_eq!(
        InputSource::from("day01.txt"),
        InputSource::File(PathBuf::from("day01.txt"))
    );
    assert_eq!(
        InputSource::default(),
        InputSource::File(PathBuf::from("input.txt"))
    );
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("file '{}' not found", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to read standard input: {0}")]
    Stdin(io::Error),
}

/// Reads the whole of the puzzle input as UTF-8 text.
pub fn read_input(source: &InputSource) -> Result<String, InputError> {
    match source {
        InputSource::Stdin => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(InputError::Stdin)?;
            Ok(input)
        }
        InputSource::File(path) => fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => InputError::NotFound { path: path.clone() },
            _ => InputError::Read {
                path: path.clone(),
                source: e,
            },
        }),
    }
}

#[test]
fn test_read_missing_file() {
    let source = InputSource::from("this/file/does/not/exist.txt");
    match read_input(&source) {
        Err(InputError::NotFound { path }) => {
            assert_eq!(path, PathBuf::from("this/file/does/not/exist.txt"));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_read_file() {
    let source = InputSource::from(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));
    let text = read_input(&source).expect("manifest should be readable");
    assert!(text.contains("[package]"));
}
