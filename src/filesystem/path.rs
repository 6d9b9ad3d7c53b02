use std::fmt;
use std::str::FromStr;

use snafu::ensure;

use super::error::{FilesystemError, InvalidPathSnafu};

pub const SEPARATOR: char = '/';

/// An absolute path split into its non-empty segments.
///
/// Consecutive and trailing separators are dropped while parsing, so `//a//b/`
/// and `/a/b` are the same path. No other normalization happens: `.` and `..`
/// are ordinary names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FsPath {
    segments: Vec<String>,
}

impl FsPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn parse(path: &str) -> Result<Self, FilesystemError> {
        ensure!(path.starts_with(SEPARATOR), InvalidPathSnafu { path });

        let segments = path
            .split(SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Final segment, `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Splits off the final segment from its parent segments.
    pub fn split_last(&self) -> Option<(&str, &[String])> {
        self.segments
            .split_last()
            .map(|(last, parents)| (last.as_str(), parents))
    }

    /// Renders the first `depth` segments as an absolute path.
    pub fn prefix(&self, depth: usize) -> String {
        render(&self.segments[..depth.min(self.segments.len())])
    }
}

fn render(segments: &[String]) -> String {
    if segments.is_empty() {
        return SEPARATOR.to_string();
    }
    segments
        .iter()
        .fold(String::new(), |mut rendered, segment| {
            rendered.push(SEPARATOR);
            rendered.push_str(segment);
            rendered
        })
}

impl fmt::Display for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.segments))
    }
}

impl FromStr for FsPath {
    type Err = FilesystemError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Self::parse(path)
    }
}

impl TryFrom<&str> for FsPath {
    type Error = FilesystemError;

    fn try_from(path: &str) -> Result<Self, Self::Error> {
        Self::parse(path)
    }
}
