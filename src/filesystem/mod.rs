//! In-memory hierarchical file system.
//!
//! The tree is rooted at a single directory and addressed by absolute,
//! `/`-separated paths. Directories keep their children sorted by name and
//! files only ever grow by appending.

mod error;
mod node;
mod path;
mod shared;
mod tree;

pub use error::FilesystemError;
pub use node::{Directory, File, Node, Resolved};
pub use path::{FsPath, SEPARATOR};
pub use shared::SharedFileSystem;
pub use tree::FileSystem;
