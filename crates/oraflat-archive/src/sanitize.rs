use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Result of sanitizing an archive entry path.
#[derive(Clone, Debug)]
pub struct SanitizedPath {
    pub original: PathBuf,
    pub resolved: PathBuf,
}

/// Resolve an archive entry path under `base`, rejecting anything that would land outside it.
pub fn sanitize_path<P: AsRef<Path>, B: AsRef<Path>>(
    entry_path: P,
    base: B,
) -> Result<SanitizedPath> {
    let entry_path = entry_path.as_ref();
    let base = base.as_ref();
    let normalized = normalize_path(entry_path)?;

    // Reject absolute paths (zip-slip protection)
    if normalized.is_absolute() || normalized.has_root() {
        return Err(Error::ZipSlip {
            entry: entry_path.to_path_buf(),
            resolved: normalized,
        });
    }

    let resolved = base.join(normalized);

    if !resolved.starts_with(base) {
        return Err(Error::ZipSlip {
            entry: entry_path.to_path_buf(),
            resolved,
        });
    }

    Ok(SanitizedPath {
        original: entry_path.to_path_buf(),
        resolved,
    })
}

/// Resolve a relative path that must stay inside `base`.
///
/// Used for paths named by a manifest rather than by the archive directory.
pub fn resolve_within<P: AsRef<Path>, B: AsRef<Path>>(relative: P, base: B) -> Result<PathBuf> {
    sanitize_path(relative, base).map(|s| s.resolved)
}

/// Normalize separators and resolve `.`/`..` without touching the filesystem.
///
/// A `..` that would climb above the start of a relative path is an escape and is rejected.
fn normalize_path(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::ParentDir => {
                if depth == 0 {
                    return Err(Error::ZipSlip {
                        entry: path.to_path_buf(),
                        resolved: result.join(".."),
                    });
                }
                result.pop();
                depth -= 1;
            }
            Component::Normal(part) => {
                result.push(part);
                depth += 1;
            }
            Component::RootDir => result.push(Component::RootDir.as_os_str()),
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::CurDir => {}
        }
    }

    if result.as_os_str().is_empty() {
        return Err(Error::InvalidPath(path.display().to_string()));
    }

    Ok(result)
}
