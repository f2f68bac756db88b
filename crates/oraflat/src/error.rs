use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file not found: '{0}'")]
    ArchiveNotFound(PathBuf),

    #[error("'{folder}' derived from '{archive}' is not a usable folder name")]
    InvalidFolderName { folder: String, archive: PathBuf },

    #[error("{manifest} not found in '{archive}'")]
    ManifestNotFound { manifest: String, archive: PathBuf },

    #[error("failed to scan '{path}' for archives: {source}")]
    Scan { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Archive(#[from] oraflat_archive::Error),

    #[error(transparent)]
    Stack(#[from] oraflat_stack::Error),

    #[error(transparent)]
    Fs(#[from] oraflat_fs::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
