//! Flatten OpenRaster (`.ora`) layer stacks into plain image folders.
//!
//! Each archive `prefix-Some_Name.ora` in a directory is unpacked into a scratch
//! `temp-some-name` folder, its `stack.xml` is read, and every layer image is copied to
//! `some-name/{layer name}{extension}`. The scratch folder is always removed afterwards.
//!
//! - [`naming`] - archive file name to output folder name
//! - [`process`] - one archive
//! - [`batch`] - every archive in a directory
//! - [`cli`] - argument parsing and logging setup for the binary

pub mod batch;
pub mod cli;
mod error;
pub mod naming;
pub mod options;
pub mod process;

pub use batch::{BatchOutcome, discover_archives, run_batch};
pub use error::{Error, Result};
pub use naming::output_folder_name;
pub use options::ProcessOptions;
pub use process::{ArchiveSummary, process_archive, try_process_archive};
