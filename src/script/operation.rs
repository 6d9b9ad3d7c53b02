use std::borrow::Cow;

use derive_more::{Display, IsVariant};
use hashlink::LinkedHashMap;
use saphyr::{Scalar, Yaml};
use tracing::debug;

use crate::filesystem::{FileSystem, FilesystemError};

fn key(name: &str) -> Yaml<'_> {
    Yaml::Value(Scalar::String(Cow::Borrowed(name)))
}

// Any scalar can be appended; null appends nothing.
fn scalar_text(value: &Yaml) -> Option<String> {
    match value {
        Yaml::Value(Scalar::String(text)) => Some(text.to_string()),
        Yaml::Value(Scalar::Integer(number)) => Some(number.to_string()),
        Yaml::Value(Scalar::FloatingPoint(number)) => Some(number.0.to_string()),
        Yaml::Value(Scalar::Boolean(flag)) => Some(flag.to_string()),
        Yaml::Value(Scalar::Null) => Some(String::new()),
        _ => None,
    }
}

/// One call against the store. Paths are kept as written so that invalid ones
/// surface as `InvalidPath` when the operation runs.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Operation {
    #[display("ls {path}")]
    Ls { path: String },
    #[display("mkdir {path}")]
    Mkdir { path: String },
    #[display("add {path}")]
    Add { path: String, content: String },
    #[display("read {path}")]
    Read { path: String },
}

/// What a successful operation produced.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Outcome {
    Listing(Vec<String>),
    Content(String),
    Done,
}

impl Operation {
    /// Parses a single-key mapping such as `mkdir: /a/b`.
    ///
    /// Returns `None` for entries of any other shape.
    pub fn from_yaml(entry: &Yaml) -> Option<Self> {
        let mapping = entry.as_mapping()?;
        if mapping.len() != 1 {
            debug!("Operation entry has {} keys, expected 1", mapping.len());
            return None;
        }
        let (kind, argument) = mapping.iter().next()?;

        match kind.as_str()? {
            "ls" => Some(Operation::Ls {
                path: argument.as_str()?.to_string(),
            }),
            "mkdir" => Some(Operation::Mkdir {
                path: argument.as_str()?.to_string(),
            }),
            "read" => Some(Operation::Read {
                path: argument.as_str()?.to_string(),
            }),
            "add" => Self::add_from_yaml(argument.as_mapping()?),
            unknown => {
                debug!("Unknown operation '{}'", unknown);
                None
            }
        }
    }

    fn add_from_yaml(arguments: &LinkedHashMap<Yaml, Yaml>) -> Option<Self> {
        let path = arguments.get(&key("path"))?.as_str()?.to_string();
        let content = match arguments.get(&key("content")) {
            Some(content) => scalar_text(content)?,
            None => String::new(),
        };

        Some(Operation::Add { path, content })
    }

    pub fn path(&self) -> &str {
        match self {
            Operation::Ls { path }
            | Operation::Mkdir { path }
            | Operation::Add { path, .. }
            | Operation::Read { path } => path,
        }
    }

    pub fn apply(&self, filesystem: &mut FileSystem) -> Result<Outcome, FilesystemError> {
        match self {
            Operation::Ls { path } => filesystem.ls(path).map(Outcome::Listing),
            Operation::Mkdir { path } => filesystem.mkdir(path).map(|()| Outcome::Done),
            Operation::Add { path, content } => filesystem
                .add_content_to_file(path, content)
                .map(|()| Outcome::Done),
            Operation::Read { path } => filesystem
                .read_content_from_file(path)
                .map(|content| Outcome::Content(content.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use saphyr::LoadableYamlNode;

    fn parse_entry(source: &str) -> Option<Operation> {
        let documents = Yaml::load_from_str(source).expect("test YAML should parse");
        Operation::from_yaml(&documents[0])
    }

    #[rstest]
    #[case("ls: /a", Operation::Ls { path: "/a".into() })]
    #[case("mkdir: /a/b/c", Operation::Mkdir { path: "/a/b/c".into() })]
    #[case("read: /a/x.txt", Operation::Read { path: "/a/x.txt".into() })]
    #[case(
        "add: { path: /a/x.txt, content: Hello }",
        Operation::Add { path: "/a/x.txt".into(), content: "Hello".into() }
    )]
    #[case(
        "add:\n  path: /a/x.txt\n  content: \" World\"",
        Operation::Add { path: "/a/x.txt".into(), content: " World".into() }
    )]
    #[case("add: { path: /empty }", Operation::Add { path: "/empty".into(), content: String::new() })]
    #[case("ls: relative", Operation::Ls { path: "relative".into() })]
    fn parses_supported_operations(#[case] source: &str, #[case] expected: Operation) {
        assert_eq!(parse_entry(source), Some(expected));
    }

    #[rstest]
    #[case("add: { path: /n, content: 123 }", "123")]
    #[case("add: { path: /n, content: -7 }", "-7")]
    #[case("add: { path: /n, content: 2.5 }", "2.5")]
    #[case("add: { path: /n, content: true }", "true")]
    #[case("add: { path: /n, content: ~ }", "")]
    #[case("add: { path: /n, content: null }", "")]
    #[case("add: { path: /n, content: \"123\" }", "123")]
    fn add_accepts_any_scalar_content(#[case] source: &str, #[case] expected: &str) {
        assert_eq!(
            parse_entry(source),
            Some(Operation::Add {
                path: "/n".into(),
                content: expected.into()
            })
        );
    }

    #[rstest]
    #[case("rm: /a")]
    #[case("just a string")]
    #[case("ls: [/a, /b]")]
    #[case("ls: 42")]
    #[case("{ ls: /a, mkdir: /b }")]
    #[case("add: /a/x.txt")]
    #[case("add: { content: orphan }")]
    #[case("add: { path: /a, content: [not, a, scalar] }")]
    fn rejects_malformed_entries(#[case] source: &str) {
        assert_eq!(parse_entry(source), None);
    }

    #[test]
    fn display_names_the_operation_and_path() {
        let add = Operation::Add {
            path: "/a/x.txt".into(),
            content: "ignored".into(),
        };
        assert_eq!(add.to_string(), "add /a/x.txt");
        assert_eq!(add.path(), "/a/x.txt");
        assert_eq!(
            Operation::Mkdir { path: "/d".into() }.to_string(),
            "mkdir /d"
        );
    }

    #[test]
    fn apply_maps_results_to_outcomes() {
        let mut filesystem = FileSystem::new();

        let mkdir = Operation::Mkdir { path: "/a".into() };
        let add = Operation::Add {
            path: "/a/x.txt".into(),
            content: "Hello".into(),
        };
        let ls = Operation::Ls { path: "/a".into() };
        let read = Operation::Read {
            path: "/a/x.txt".into(),
        };

        assert_eq!(mkdir.apply(&mut filesystem), Ok(Outcome::Done));
        assert_eq!(add.apply(&mut filesystem), Ok(Outcome::Done));
        assert_eq!(
            ls.apply(&mut filesystem),
            Ok(Outcome::Listing(vec!["x.txt".into()]))
        );
        assert_eq!(
            read.apply(&mut filesystem),
            Ok(Outcome::Content("Hello".into()))
        );
    }

    #[test]
    fn apply_surfaces_filesystem_errors() {
        let mut filesystem = FileSystem::new();
        let read = Operation::Read {
            path: "/missing".into(),
        };

        assert_eq!(
            read.apply(&mut filesystem),
            Err(FilesystemError::NotFound {
                path: "/missing".into()
            })
        );
    }
}
