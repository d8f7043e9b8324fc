//! Error types shared by the jack crates

use thiserror::Error;

/// Result alias used throughout jack-common
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Query or connection failure reported by sqlx
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem failure (root folder creation, config file reads)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or unusable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Channel, video or other record does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// True when the error means the requested record is absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
