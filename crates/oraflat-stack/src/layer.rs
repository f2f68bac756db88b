use std::path::Path;

/// One `<layer>` element as it appears in the manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerEntry {
    pub name: Option<String>,
    pub src: Option<String>,
    /// Number of enclosing `<stack>` elements.
    pub depth: usize,
}

/// A layer carrying both a non-empty `name` and `src`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidLayer<'a> {
    pub name: &'a str,
    pub src: &'a str,
}

impl LayerEntry {
    pub fn valid(&self) -> Option<ValidLayer<'_>> {
        let name = self.name.as_deref().filter(|n| !n.is_empty())?;
        let src = self.src.as_deref().filter(|s| !s.is_empty())?;
        Some(ValidLayer { name, src })
    }
}

impl ValidLayer<'_> {
    /// Extension of `src` including the leading dot, or an empty string.
    pub fn extension(&self) -> String {
        Path::new(self.src)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }

    /// `{name}{extension}`
    pub fn output_file_name(&self) -> String {
        format!("{}{}", self.name, self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: Option<&str>, src: Option<&str>) -> LayerEntry {
        LayerEntry {
            name: name.map(str::to_string),
            src: src.map(str::to_string),
            depth: 1,
        }
    }

    #[test]
    fn valid_requires_both_attributes() {
        assert!(entry(Some("base"), Some("data/base.png")).valid().is_some());
        assert!(entry(None, Some("data/base.png")).valid().is_none());
        assert!(entry(Some("base"), None).valid().is_none());
        assert!(entry(Some(""), Some("data/base.png")).valid().is_none());
        assert!(entry(Some("base"), Some("")).valid().is_none());
    }

    #[test]
    fn output_name_keeps_last_extension() {
        let layer = entry(Some("shine"), Some("data/shine.layer.png"));
        assert_eq!(layer.valid().unwrap().output_file_name(), "shine.png");
    }

    #[test]
    fn output_name_without_extension() {
        let layer = entry(Some("raw"), Some("data/raw"));
        assert_eq!(layer.valid().unwrap().extension(), "");
        assert_eq!(layer.valid().unwrap().output_file_name(), "raw");
    }

    #[test]
    fn dotfile_has_no_extension() {
        let layer = entry(Some("hidden"), Some("data/.hidden"));
        assert_eq!(layer.valid().unwrap().output_file_name(), "hidden");
    }
}
