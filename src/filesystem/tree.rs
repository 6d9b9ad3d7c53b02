use snafu::prelude::*;
use tracing::debug;

use super::error::{
    FilesystemError, InvalidRootTargetSnafu, NotADirectorySnafu, NotAFileSnafu, NotFoundSnafu,
};
use super::node::{Directory, File, Node, Resolved};
use super::path::FsPath;

/// In-memory tree rooted at a single directory.
///
/// Every operation parses its path, walks the tree from the root and then acts
/// on the node it reached. A failing walk stops before touching the failing
/// segment, so errors never leave half-applied changes behind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileSystem {
    root: Directory,
}

impl FileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &Directory {
        &self.root
    }

    /// Lists a directory's children in ascending order, or a file's own name.
    pub fn ls(&self, path: impl AsRef<str>) -> Result<Vec<String>, FilesystemError> {
        let path = FsPath::parse(path.as_ref())?;
        let listing = self.resolve(&path)?.ls();
        debug!("Listed {}: {} entries", path, listing.len());
        Ok(listing)
    }

    /// Creates every missing directory along `path`, like `mkdir -p`.
    ///
    /// Existing directories are left as they are, so `mkdir("/")` and repeated
    /// calls succeed without changing anything.
    pub fn mkdir(&mut self, path: impl AsRef<str>) -> Result<(), FilesystemError> {
        let path = FsPath::parse(path.as_ref())?;
        self.ensure_dir_path(&path)?;
        debug!("Ensured directory {}", path);
        Ok(())
    }

    /// Appends `content` to the file at `path`, creating the file and its
    /// parent directories when missing.
    pub fn add_content_to_file(
        &mut self,
        path: impl AsRef<str>,
        content: impl AsRef<str>,
    ) -> Result<(), FilesystemError> {
        let path = FsPath::parse(path.as_ref())?;
        let content = content.as_ref();

        let file = self.ensure_file_path(&path)?;
        file.append(content);
        debug!(
            "Appended {} bytes to {} ({} bytes total)",
            content.len(),
            path,
            file.len()
        );
        Ok(())
    }

    /// Returns the full content of the file at `path`. Directories fail with
    /// `NotAFile`.
    pub fn read_content_from_file(&self, path: impl AsRef<str>) -> Result<&str, FilesystemError> {
        let path = FsPath::parse(path.as_ref())?;
        match self.resolve(&path)? {
            Resolved::File { file, .. } => Ok(file.content()),
            Resolved::Directory { .. } => NotAFileSnafu {
                path: path.to_string(),
            }
            .fail(),
        }
    }

    /// Walks to the node at `path` without creating anything.
    pub fn resolve(&self, path: &FsPath) -> Result<Resolved<'_>, FilesystemError> {
        let Some((name, parents)) = path.split_last() else {
            return Ok(Resolved::Directory {
                name: "",
                directory: &self.root,
            });
        };

        let parent = parents
            .iter()
            .enumerate()
            .try_fold(&self.root, |current, (depth, segment)| {
                match current.get(segment) {
                    Some(Node::Directory(directory)) => Ok(directory),
                    Some(Node::File(_)) => NotADirectorySnafu {
                        path: path.prefix(depth + 1),
                    }
                    .fail(),
                    None => NotFoundSnafu {
                        path: path.prefix(depth + 1),
                    }
                    .fail(),
                }
            })?;

        parent.entry(name).with_context(|| NotFoundSnafu {
            path: path.to_string(),
        })
    }

    /// Walks every segment of `path` as a directory, creating missing ones.
    pub fn ensure_dir_path(&mut self, path: &FsPath) -> Result<&mut Directory, FilesystemError> {
        Self::ensure_directories(&mut self.root, path, path.segments())
    }

    /// Like [`Self::ensure_dir_path`] for the parents, then opens or creates the file.
    pub fn ensure_file_path(&mut self, path: &FsPath) -> Result<&mut File, FilesystemError> {
        let (name, parents) = path.split_last().context(InvalidRootTargetSnafu)?;

        Self::ensure_directories(&mut self.root, path, parents)?
            .ensure_file(name)
            .with_context(|| NotAFileSnafu {
                path: path.to_string(),
            })
    }

    // Shared by both ensuring walks. Only existing nodes can fail a segment, so
    // nothing has been created yet when an error is returned.
    fn ensure_directories<'a>(
        root: &'a mut Directory,
        path: &FsPath,
        segments: &[String],
    ) -> Result<&'a mut Directory, FilesystemError> {
        segments
            .iter()
            .enumerate()
            .try_fold(root, |current, (depth, segment)| {
                current
                    .ensure_dir(segment)
                    .with_context(|| NotADirectorySnafu {
                        path: path.prefix(depth + 1),
                    })
            })
    }
}
