//! Error types for manifest parsing.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read manifest '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed manifest: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute in manifest: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("manifest has no root element")]
    NoRoot,

    #[error("manifest ends before <{0}> is closed")]
    Unclosed(String),

    #[error("element <{0}> after the root element")]
    TrailingElement(String),

    #[error("text outside the root element")]
    StrayText,
}

pub type Result<T> = std::result::Result<T, Error>;
