use std::fs::{self, FileTimes};
use std::path::Path;

use crate::{Error, Result};

/// Copy a single file, overwriting `dest` if present.
///
/// Carries over content, permission bits, and the access and modification times of `src`.
/// Returns the number of bytes copied.
pub fn copy_with_metadata(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<u64> {
    let src = src.as_ref();
    let dest = dest.as_ref();

    if !src.is_file() {
        return Err(Error::NotFound(src.to_path_buf()));
    }

    let bytes = fs::copy(src, dest).map_err(|e| Error::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;

    let metadata = fs::metadata(src).map_err(|e| Error::Read {
        path: src.to_path_buf(),
        source: e,
    })?;

    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }

    let file = open_for_times(dest).map_err(|e| Error::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;
    file.set_times(times).map_err(|e| Error::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;

    tracing::trace!(src = %src.display(), dest = %dest.display(), bytes, "copied file");
    Ok(bytes)
}

// futimens only needs ownership, so a read-only handle works even when the copied
// permission bits forbid writing.
#[cfg(unix)]
fn open_for_times(path: &Path) -> std::io::Result<fs::File> {
    fs::File::open(path)
}

#[cfg(not(unix))]
fn open_for_times(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new().write(true).open(path)
}
