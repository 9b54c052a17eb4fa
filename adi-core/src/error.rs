//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions reported by [`Parser::parse`](crate::Parser::parse).
///
/// Malformed tags are never errors; they are read as comment text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `parse` was called before a handler was registered.
    #[error("no handler registered; call `set_handler` before `parse`")]
    NoHandler,
}

/// Failures while building a parser from a file or raw bytes.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
