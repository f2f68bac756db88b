//! ZIP container extraction with path sanitization.
//!
//! # Architecture
//!
//! - `detect.rs` - ZIP signature detection
//! - `sanitize.rs` - Path sanitization (zip-slip prevention)
//! - `extract.rs` - Entry-by-entry extraction into a directory
//! - `report.rs` - What was written where

pub use error::{Error, Result};
pub use extract::{extract_file, extract_from_reader};
pub use options::{ExtractOptions, Progress};
pub use report::{ExtractReport, ExtractedEntry};
pub use sanitize::{SanitizedPath, resolve_within, sanitize_path};

mod detect;
mod error;
mod extract;
mod options;
mod report;
mod sanitize;
