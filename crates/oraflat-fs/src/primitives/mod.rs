pub mod copy;
pub mod dir;

pub use copy::{copy_with_metadata};
pub use dir::ensure_dir;
