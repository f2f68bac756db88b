//! OpenRaster layer manifest parsing.
//!
//! An `.ora` container carries a `stack.xml` describing nested `<stack>` groups of
//! `<layer name=".." src=".."/>` entries. [`Manifest`] flattens that tree into the list of
//! layers in document order; [`LayerEntry::valid`] filters out entries that cannot be
//! materialized.
//!
//! ```
//! use oraflat_stack::Manifest;
//!
//! let manifest = Manifest::parse(
//!     r#"<image><stack><layer name="base" src="data/base.png"/></stack></image>"#,
//! ).unwrap();
//! let layer = manifest.valid_layers().next().unwrap();
//! assert_eq!(layer.output_file_name(), "base.png");
//! ```

pub use error::{Error, Result};
pub use layer::{LayerEntry, ValidLayer};
pub use manifest::{MANIFEST_NAME, Manifest};

mod error;
mod layer;
mod manifest;
