//! Errors at the I/O boundaries (index, label store, server).
//! Classification itself never fails.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CapError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid sequence index {path}: {source}")]
    Index {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("corrupt label store {path} at line {line}: {source}")]
    StoreLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode label record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

pub type CapResult<T> = Result<T, CapError>;
