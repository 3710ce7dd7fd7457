use std::collections::TryReserveError;

use thiserror::Error;

/// Errors raised while turning a line of input into a [`Statement`](crate::compiler::Statement).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PrepareError {
    #[error("Syntax error. Could not parse statement.")]
    SyntaxError,
    #[error("ID must be positive.")]
    NegativeId,
    #[error("String is too long.")]
    StringTooLong,
    #[error("String must not contain NUL bytes.")]
    NulByte,
    #[error("Unrecognized keyword at start of '{0}'.")]
    UnrecognizedStatement(String),
}

/// Errors raised by the storage engine.
#[derive(Error, Debug)]
pub enum ExecuteError {
    /// Recoverable; the table is left as it was.
    #[error("Table full.")]
    TableFull,
    /// Unrecoverable; no page could be obtained for the next row.
    #[error("failed to allocate page {page_num}: {source}")]
    AllocationFailure {
        page_num: usize,
        #[source]
        source: TryReserveError,
    },
}

impl ExecuteError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ExecuteError::AllocationFailure { .. })
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MetaCommandError {
    #[error("Unrecognized command '{0}'")]
    Unrecognized(String),
}

/// Errors that stop the interpreter loop.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Execute(#[from] ExecuteError),
    #[error("Failed to read input")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
