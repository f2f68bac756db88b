//! Single-archive processing: unpack, read the layer manifest, copy layers out.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use oraflat_archive::{ExtractOptions, Progress, extract_file, resolve_within};
use oraflat_fs::{Workspace, copy_with_metadata, ensure_dir};
use oraflat_stack::{Manifest, ValidLayer};

use crate::error::{Error, Result};
use crate::naming::folder_name_for;
use crate::options::ProcessOptions;

/// What a successful run over one archive produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub folder: String,
    pub output_dir: PathBuf,
    /// Files written into `output_dir`, in manifest order.
    pub written: Vec<PathBuf>,
    /// `src` values that did not resolve to an extracted file.
    pub missing: Vec<String>,
    /// Layers without a usable `name` or `src`, or whose name is not a plain file name.
    pub skipped: usize,
}

/// Process one archive, placing output and scratch folders under `root`.
///
/// Never fails: every error is logged and turned into `false`.
pub fn process_archive(archive: &Path, root: &Path, options: &ProcessOptions) -> bool {
    match try_process_archive(archive, root, options) {
        Ok(summary) => {
            tracing::debug!(
                archive = %archive.display(),
                written = summary.written.len(),
                missing = summary.missing.len(),
                skipped = summary.skipped,
                "archive done"
            );
            true
        }
        Err(e @ Error::ArchiveNotFound(_)) => {
            tracing::error!("{e}");
            false
        }
        Err(e) => {
            tracing::error!("Error processing {}: {e}", archive.display());
            false
        }
    }
}

/// Fallible core of [`process_archive`].
///
/// The scratch workspace is dropped, and therefore removed, on every return path.
pub fn try_process_archive(
    archive: &Path,
    root: &Path,
    options: &ProcessOptions,
) -> Result<ArchiveSummary> {
    if !archive.exists() {
        return Err(Error::ArchiveNotFound(archive.to_path_buf()));
    }

    let folder = folder_name_for(archive, &options.extension);
    if !is_plain_file_name(&folder) {
        return Err(Error::InvalidFolderName {
            folder,
            archive: archive.to_path_buf(),
        });
    }
    let workspace = Workspace::new(root.join(options.temp_dir_name(&folder)))?;
    let output_dir = root.join(&folder);
    ensure_dir(&output_dir)?;

    let report = extract_file(archive, workspace.path(), &extract_options())?;
    tracing::debug!(
        entries = report.entry_count,
        bytes = report.total_bytes,
        "extracted {}",
        archive.display()
    );

    let manifest_path = workspace.join(&options.manifest_name);
    if !manifest_path.is_file() {
        return Err(Error::ManifestNotFound {
            manifest: options.manifest_name.clone(),
            archive: archive.to_path_buf(),
        });
    }
    let manifest = Manifest::from_path(&manifest_path)?;

    let mut summary = ArchiveSummary {
        folder,
        output_dir,
        ..Default::default()
    };

    for entry in &manifest.layers {
        match entry.valid() {
            Some(layer) => materialize(layer, &workspace, &mut summary)?,
            None => summary.skipped += 1,
        }
    }

    Ok(summary)
}

fn extract_options() -> ExtractOptions {
    ExtractOptions::default().on_progress(Arc::new(|progress: Progress| {
        if let Some(file) = &progress.current_file {
            tracing::trace!(
                entry = %file.display(),
                done = progress.entries_processed,
                total = progress.entries_total,
                bytes = progress.bytes_processed,
                "unpacked"
            );
        }
    }))
}

fn materialize(
    layer: ValidLayer<'_>,
    workspace: &Workspace,
    summary: &mut ArchiveSummary,
) -> Result<()> {
    let source = match resolve_within(layer.src, workspace.path()) {
        Ok(path) if path.is_file() => path,
        Ok(path) => {
            tracing::warn!("Source file not found: {}", path.display());
            summary.missing.push(layer.src.to_string());
            return Ok(());
        }
        Err(e) => {
            tracing::warn!("Source file not found: {} ({e})", layer.src);
            summary.missing.push(layer.src.to_string());
            return Ok(());
        }
    };

    let file_name = layer.output_file_name();
    if !is_plain_file_name(&file_name) {
        tracing::warn!(layer = layer.name, "layer name is not a plain file name, skipped");
        summary.skipped += 1;
        return Ok(());
    }

    let dest = summary.output_dir.join(&file_name);
    copy_with_metadata(&source, &dest)?;
    tracing::info!("Processed: {file_name}");
    summary.written.push(dest);
    Ok(())
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
