use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Create `path` and any missing parents. Succeeds when the directory already exists.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if path.exists() && !path.is_dir() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }

    fs::create_dir_all(path).map_err(|e| Error::CreateDir {
        path: path.to_path_buf(),
        source: e,
    })
}
