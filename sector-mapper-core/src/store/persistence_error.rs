use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("failure reading or writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failure decoding entities from {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failure encoding entities: {source}")]
    Encode { source: serde_json::Error },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
