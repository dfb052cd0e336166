use std::io;
use thiserror::Error;

/// Errors raised by the chained course table itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Course id {0:?} is not a non-negative integer")]
    InvalidKey(String),
    #[error("Bucket count must be at least 1")]
    InvalidBucketCount,
}

/// Errors raised while loading courses from a delimited source.
///
/// Loading stops at the first error. Rows inserted before it remain in the table.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read course file: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),
    #[error("Line {line}: expected at least {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: {source}")]
    InvalidRow {
        line: u64,
        #[source]
        source: TableError,
    },
}

/// Errors surfaced by the interactive command line.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("Readline failure: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("No courses loaded. Run 'load' first")]
    NotLoaded,
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Unknown command: {0}. Type 'help' for commands")]
    UnknownCommand(String),
}
