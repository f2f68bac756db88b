//! Filesystem primitives for layer extraction.
//!
//! - [`Workspace`] - scratch directory removed on drop
//! - [`ensure_dir`] - idempotent directory creation
//! - [`copy_with_metadata`] - file copy that carries permissions and timestamps

mod error;
pub mod primitives;
mod workspace;

pub use error::{Error, Result};
pub use primitives::{copy_with_metadata, ensure_dir};
pub use workspace::Workspace;
