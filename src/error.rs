//! Error types for the opportunities API

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

impl Error {
    pub fn invalid_origin(origin: impl Into<String>) -> Self {
        Error::InvalidOrigin(origin.into())
    }
}
