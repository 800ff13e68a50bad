//! Error types for colstats-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error(transparent)]
    Core(#[from] colstats_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),
}

impl Error {
    /// True when the error means the input file does not exist
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
