//! Error type shared by the catalog loader and the rule compiler

use thiserror::Error;

/// Errors produced while building the engine's inputs
#[derive(Debug, Error)]
pub enum Error {
    /// A rule pattern failed to compile
    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A catalog file could not be read
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog file is not valid catalog JSON
    #[error("malformed catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
