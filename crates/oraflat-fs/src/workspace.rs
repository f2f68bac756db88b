use std::path::{Path, PathBuf};

use crate::primitives::ensure_dir;
use crate::Result;

/// A scratch directory that is removed when dropped.
///
/// Creating a workspace over an existing directory reuses it. Removal happens on every exit
/// path of the owner, including early returns and unwinding.
#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
}

impl Workspace {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        ensure_dir(&path)?;
        tracing::debug!(path = %path.display(), "created scratch workspace");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a path relative to the workspace root.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.path.join(relative)
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }
        match std::fs::remove_dir_all(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "removed scratch workspace"),
            Err(e) => tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove scratch workspace"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_workspace_cleanup_on_drop() {
        let dir = tempdir().unwrap();
        let staging = dir.path().join("temp-icons");
        {
            let workspace = Workspace::new(&staging).unwrap();
            std::fs::create_dir_all(workspace.join("data")).unwrap();
            std::fs::write(workspace.join("data/layer.png"), "data").unwrap();
            assert!(staging.exists());
        }
        assert!(!staging.exists());
    }

    #[test]
    fn test_workspace_reuses_existing_dir() {
        let dir = tempdir().unwrap();
        let staging = dir.path().join("temp-icons");
        std::fs::create_dir_all(&staging).unwrap();
        std::fs::write(staging.join("leftover"), "stale").unwrap();

        let workspace = Workspace::new(&staging).unwrap();
        assert!(workspace.join("leftover").exists());
        drop(workspace);

        assert!(!staging.exists());
    }

    #[test]
    fn test_workspace_drop_after_external_removal() {
        let dir = tempdir().unwrap();
        let staging = dir.path().join("temp-gone");
        let workspace = Workspace::new(&staging).unwrap();
        std::fs::remove_dir_all(&staging).unwrap();
        drop(workspace);
        assert!(!staging.exists());
    }
}
