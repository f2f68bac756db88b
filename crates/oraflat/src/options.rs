use oraflat_stack::MANIFEST_NAME;

pub const DEFAULT_EXTENSION: &str = "ora";
pub const DEFAULT_TEMP_PREFIX: &str = "temp-";

/// Fixed names used while processing archives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessOptions {
    pub extension: String,
    pub manifest_name: String,
    pub temp_prefix: String,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            manifest_name: MANIFEST_NAME.to_string(),
            temp_prefix: DEFAULT_TEMP_PREFIX.to_string(),
        }
    }
}

impl ProcessOptions {
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// `.{extension}`
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }

    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.suffix())
    }

    pub fn temp_dir_name(&self, folder: &str) -> String {
        format!("{}{}", self.temp_prefix, folder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ProcessOptions::default();
        assert_eq!(options.suffix(), ".ora");
        assert_eq!(options.manifest_name, "stack.xml");
        assert_eq!(options.temp_dir_name("coinicon"), "temp-coinicon");
    }

    #[test]
    fn matches_is_case_sensitive() {
        let options = ProcessOptions::default();
        assert!(options.matches("pack-CoinIcon.ora"));
        assert!(!options.matches("pack-CoinIcon.ORA"));
        assert!(!options.matches("notes.ora.txt"));
    }

    #[test]
    fn extension_override() {
        let options = ProcessOptions::default().extension("zip");
        assert_eq!(options.suffix(), ".zip");
        assert!(options.matches("bundle.zip"));
        assert!(!options.matches("bundle.ora"));
    }
}
