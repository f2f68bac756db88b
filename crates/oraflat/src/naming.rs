use std::path::Path;

use crate::options::DEFAULT_EXTENSION;

/// Output folder for an `.ora` archive.
///
/// Takes the part of the file name after its last hyphen, drops the `.ora` suffix,
/// lowercases it and turns underscores into hyphens. Only the final path component is looked at.
pub fn output_folder_name(archive: impl AsRef<Path>) -> String {
    folder_name_for(archive, DEFAULT_EXTENSION)
}

pub fn folder_name_for(archive: impl AsRef<Path>, extension: &str) -> String {
    let archive = archive.as_ref();
    let file_name = archive
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| archive.to_string_lossy());

    let tail = file_name
        .rsplit_once('-')
        .map_or(&*file_name, |(_, tail)| tail);
    let suffix = format!(".{extension}");
    let stem = tail.strip_suffix(suffix.as_str()).unwrap_or(tail);

    stem.to_lowercase().replace('_', "-")
}
