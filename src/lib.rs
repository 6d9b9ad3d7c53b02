//! An in-memory hierarchical file system with `ls`, `mkdir`, append and read
//! operations over absolute `/`-separated paths.

#![allow(clippy::enum_variant_names)]

pub mod filesystem;
pub mod script;

pub use filesystem::{FileSystem, FilesystemError, FsPath, SharedFileSystem};
