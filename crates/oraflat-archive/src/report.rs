use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ExtractReport {
    pub entry_count: usize,
    pub total_bytes: u64,
    pub entries: Vec<ExtractedEntry>,
}

#[derive(Clone, Debug)]
pub struct ExtractedEntry {
    pub original_path: PathBuf,
    pub target_path: PathBuf,
    pub size: u64,
    pub is_directory: bool,
}

impl ExtractReport {
    pub(crate) fn from_entries(entries: Vec<ExtractedEntry>) -> Self {
        let total_bytes = entries.iter().map(|e| e.size).sum();
        Self {
            entry_count: entries.len(),
            total_bytes,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_totals() {
        let report = ExtractReport::from_entries(vec![
            ExtractedEntry {
                original_path: PathBuf::from("data"),
                target_path: PathBuf::from("temp-icons/data"),
                size: 0,
                is_directory: true,
            },
            ExtractedEntry {
                original_path: PathBuf::from("data/base.png"),
                target_path: PathBuf::from("temp-icons/data/base.png"),
                size: 1024,
                is_directory: false,
            },
            ExtractedEntry {
                original_path: PathBuf::from("stack.xml"),
                target_path: PathBuf::from("temp-icons/stack.xml"),
                size: 200,
                is_directory: false,
            },
        ]);
        assert_eq!(report.entry_count, 3);
        assert_eq!(report.total_bytes, 1224);
        assert_eq!(report.entries[1].target_path, PathBuf::from("temp-icons/data/base.png"));
    }
}
