//! Directory-wide driver.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::naming::folder_name_for;
use crate::options::ProcessOptions;
use crate::process::process_archive;

/// Aggregate result of one batch run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchOutcome {
    /// `true` only when archives were found and every one of them succeeded.
    pub success: bool,
    /// Distinct output folder names, sorted.
    pub folders: Vec<String>,
}

impl BatchOutcome {
    /// Outcome for a directory without any archive.
    pub fn empty() -> Self {
        Self {
            success: false,
            folders: Vec::new(),
        }
    }

    /// Workflow-command line consumed by CI.
    pub fn set_output_line(&self) -> String {
        format!("::set-output name=processed_folders::{}", self.folders.join(" "))
    }
}

impl fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Processed folders: {:?}", self.folders)?;
        write!(f, "Success: {}", self.success)
    }
}

/// Archives directly inside `dir`, sorted by file name.
pub fn discover_archives(dir: &Path, options: &ProcessOptions) -> Result<Vec<PathBuf>> {
    let scan_err = |source| Error::Scan {
        path: dir.to_path_buf(),
        source,
    };

    let mut archives = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if options.matches(&name) && entry.path().is_file() {
            archives.push(entry.path());
        }
    }

    archives.sort();
    Ok(archives)
}

/// Process every archive in `dir`, writing outputs next to them.
///
/// A failing archive marks the batch failed but never stops it.
pub fn run_batch(dir: &Path, options: &ProcessOptions) -> Result<BatchOutcome> {
    let archives = discover_archives(dir, options)?;

    if archives.is_empty() {
        tracing::info!("No {} files found in {}", options.suffix(), dir.display());
        return Ok(BatchOutcome::empty());
    }

    tracing::info!(
        "Found {} {} files: {:?}",
        archives.len(),
        options.suffix(),
        archives
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy())
            .collect::<Vec<_>>()
    );

    let mut success = true;
    let mut folders = BTreeSet::new();

    for archive in &archives {
        tracing::info!("Processing {}...", archive.display());
        folders.insert(folder_name_for(archive, &options.extension));
        if !process_archive(archive, dir, options) {
            success = false;
        }
    }

    Ok(BatchOutcome {
        success,
        folders: folders.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_output_line_joins_with_spaces() {
        let outcome = BatchOutcome {
            success: true,
            folders: vec!["coinicon".into(), "player-avatar".into()],
        };
        assert_eq!(
            outcome.set_output_line(),
            "::set-output name=processed_folders::coinicon player-avatar"
        );
    }

    #[test]
    fn empty_outcome() {
        let outcome = BatchOutcome::empty();
        assert!(!outcome.success);
        assert!(outcome.folders.is_empty());
        assert_eq!(outcome.set_output_line(), "::set-output name=processed_folders::");
    }

    #[test]
    fn summary_display() {
        let outcome = BatchOutcome {
            success: false,
            folders: vec!["gem".into()],
        };
        assert_eq!(outcome.to_string(), "Processed folders: [\"gem\"]\nSuccess: false");
    }

    #[test]
    fn discover_skips_directories_and_other_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b-Two.ora"), "").unwrap();
        std::fs::write(dir.path().join("a-One.ora"), "").unwrap();
        std::fs::write(dir.path().join("readme.txt"), "").unwrap();
        std::fs::create_dir(dir.path().join("folder.ora")).unwrap();

        let found = discover_archives(dir.path(), &ProcessOptions::default()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a-One.ora", "b-Two.ora"]);
    }

    #[test]
    fn discover_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover_archives(&dir.path().join("nope"), &ProcessOptions::default());
        assert!(matches!(result, Err(Error::Scan { .. })));
    }
}
