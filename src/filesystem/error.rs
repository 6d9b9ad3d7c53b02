use snafu::Snafu;

/// Failure kinds raised while resolving or mutating the tree.
///
/// `path` is the absolute prefix of the requested path up to the segment
/// where the walk stopped, so `/a/b/c` failing on `b` reports `/a/b`.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum FilesystemError {
    #[snafu(display("Invalid path '{}': paths must start with '/'", path))]
    InvalidPath { path: String },
    #[snafu(display("No such file or directory: {}", path))]
    NotFound { path: String },
    #[snafu(display("Not a directory: {}", path))]
    NotADirectory { path: String },
    #[snafu(display("Not a file: {}", path))]
    NotAFile { path: String },
    #[snafu(display("The root directory cannot be used as a file"))]
    InvalidRootTarget,
}
