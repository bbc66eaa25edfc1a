//! error types of the world, pattern and configuration layers.
//!
//! the cell and its rule are total and never fail; only the collaborators
//! around them do.

use std::path::PathBuf;

use thiserror::Error;

use crate::Pos;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("position {pos} is outside of the {width}x{height} world")]
    OutOfBounds { pos: Pos, width: i32, height: i32 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// a character that is neither `#`, `.` nor a space (1-based position)
    #[error("unknown symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol {
        symbol: char,
        line: usize,
        column: usize,
    },

    #[error("pattern is too large: {0} rows or columns")]
    TooLarge(usize),

    #[error(transparent)]
    World(#[from] WorldError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("must provide a pattern path argument")]
    MissingPath,

    #[error("invalid generation count: {0:?}")]
    InvalidGenerations(String),
}

/// all errors surfaced by the crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
