use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("'{0}' exists and is not a directory")]
    NotADirectory(PathBuf),

    #[error("path not found: '{0}'")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
