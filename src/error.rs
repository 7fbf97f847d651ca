//! Error types for the csv2docx library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for csv2docx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting tabular text to a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input text block contains no header record.
    #[error("Empty input: no header record found")]
    EmptyInput,

    /// A record has a different field count than the header.
    #[error("Malformed input: record on line {line} has {found} fields, expected {expected}")]
    RaggedRow {
        /// 1-based line number of the offending record (0 if unknown)
        line: u64,
        /// Field count of the header record
        expected: usize,
        /// Field count of the offending record
        found: usize,
    },

    /// Other failure while reading the delimited text.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The document container could not be serialized.
    #[error("Render error: {0}")]
    Render(String),

    /// An output file could not be written.
    #[error("Failed to write {path}: {source}")]
    WriteFile {
        /// Path of the file that failed to write
        path: PathBuf,
        /// Underlying OS error
        source: io::Error,
    },
}
