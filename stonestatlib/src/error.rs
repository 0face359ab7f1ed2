//! Error types for stonestatlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, summarizing, or decoding inputs
#[derive(Error, Debug)]
pub enum StonestatError {
    /// A board contains a character outside `O`, `X`, `-`
    #[error("unexpected character {character:?} in board: {record:?}")]
    MalformedRecord { record: String, character: char },

    /// One or more input files do not exist
    #[error("input file not found: {}", join_paths(.0))]
    MissingInputs(Vec<PathBuf>),

    /// Failed to open an input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A CNF count line could not be decoded
    #[error("failed to parse line: {line} ({reason})")]
    MalformedCnfLine { line: String, reason: String },

    /// An input that must contain records had none
    #[error("no records parsed from {0}")]
    EmptyInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
