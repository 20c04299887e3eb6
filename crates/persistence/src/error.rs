//! Persistence errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to create log directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write transcript {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

impl From<PersistenceError> for aurora_ivr_core::Error {
    fn from(err: PersistenceError) -> Self {
        aurora_ivr_core::Error::Log(err.to_string())
    }
}
