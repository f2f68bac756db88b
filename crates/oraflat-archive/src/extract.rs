//! ZIP extraction into a plain directory.
//!
//! Entry permissions and symlinks are not restored: every file entry is written as a regular
//! file with default permissions, and directory entries become directories.

use std::fs::File;
use std::io::{self, Read, Seek};
use std::path::Path;

use oraflat_fs::ensure_dir;

use crate::detect::detect_zip_from_reader;
use crate::error::{Error, Result};
use crate::options::{ExtractOptions, Progress};
use crate::report::{ExtractReport, ExtractedEntry};
use crate::sanitize::sanitize_path;

/// Open `archive` and extract every entry under `destination`.
pub fn extract_file(
    archive: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<ExtractReport> {
    let archive = archive.as_ref();
    let file = File::open(archive).map_err(|e| Error::Open {
        path: archive.to_path_buf(),
        source: e,
    })?;
    extract_from_reader(io::BufReader::new(file), destination.as_ref(), options)
}

/// Extract a ZIP stream under `destination`, which is created if missing.
pub fn extract_from_reader<R: Read + Seek>(
    mut reader: R,
    destination: &Path,
    options: &ExtractOptions,
) -> Result<ExtractReport> {
    if !detect_zip_from_reader(&mut reader)? {
        return Err(Error::UnsupportedFormat);
    }

    let mut archive = zip::ZipArchive::new(reader)?;
    ensure_dir(destination)?;

    let entries_total = archive.len();
    let mut entries = Vec::with_capacity(entries_total);
    let mut bytes_processed = 0u64;

    for index in 0..entries_total {
        let mut file = archive.by_index(index)?;

        let raw_path = file
            .enclosed_name()
            .ok_or_else(|| Error::InvalidPath(file.name().to_string()))?
            .to_path_buf();
        let sanitized = sanitize_path(&raw_path, destination)?;
        let is_directory = file.is_dir();
        let size = file.size();

        if is_directory {
            ensure_dir(&sanitized.resolved)?;
        } else {
            if let Some(parent) = sanitized.resolved.parent() {
                ensure_dir(parent)?;
            }
            let failed = |source| Error::ExtractionFailed {
                path: sanitized.resolved.clone(),
                source,
            };
            let mut out = File::create(&sanitized.resolved).map_err(failed)?;
            io::copy(&mut file, &mut out).map_err(failed)?;
        }

        bytes_processed += size;

        options.report(Progress {
            entries_processed: index + 1,
            entries_total,
            bytes_processed,
            current_file: Some(sanitized.original.clone()),
        });

        entries.push(ExtractedEntry {
            original_path: sanitized.original,
            target_path: sanitized.resolved,
            size,
            is_directory,
        });
    }

    Ok(ExtractReport::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};
    use std::sync::{Arc, Mutex};

    use zip::write::SimpleFileOptions;

    use super::*;

    fn build_zip(files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in files {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn extract_from_reader_invalid_format() {
        let cursor = Cursor::new([0xDE, 0xAD, 0xBE, 0xEF]);
        let temp_dir = tempfile::tempdir().unwrap();
        let result = extract_from_reader(cursor, temp_dir.path(), &ExtractOptions::default());
        assert!(matches!(result, Err(Error::UnsupportedFormat)));
    }

    #[test]
    fn extract_truncated_zip_is_corrupted() {
        let mut data = build_zip(&[("stack.xml", b"<image/>")]);
        data.truncate(data.len() / 2);
        let temp_dir = tempfile::tempdir().unwrap();
        let options = ExtractOptions::default();
        let result = extract_from_reader(Cursor::new(data), temp_dir.path(), &options);
        assert!(matches!(result, Err(Error::Corrupted(_))));
    }

    #[test]
    fn extract_nested_entries() {
        let data = build_zip(&[("stack.xml", b"<image/>"), ("data/layer0.png", b"png-bytes")]);
        let temp_dir = tempfile::tempdir().unwrap();
        let dest = temp_dir.path().join("temp-icons");

        let options = ExtractOptions::default();
        let report = extract_from_reader(Cursor::new(data), &dest, &options).unwrap();

        assert_eq!(report.entry_count, 2);
        assert_eq!(report.total_bytes, 8 + 9);
        assert_eq!(std::fs::read(dest.join("data/layer0.png")).unwrap(), b"png-bytes");
        assert_eq!(std::fs::read(dest.join("stack.xml")).unwrap(), b"<image/>");
    }

    #[test]
    fn extract_reports_progress() {
        let data = build_zip(&[("a.png", b"a"), ("b.png", b"bb")]);
        let temp_dir = tempfile::tempdir().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let options = ExtractOptions::default().on_progress(Arc::new(move |p: Progress| {
            sink.lock().unwrap().push((p.entries_processed, p.bytes_processed));
        }));

        extract_from_reader(Cursor::new(data), temp_dir.path(), &options).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![(1, 1), (2, 3)]);
    }
}
