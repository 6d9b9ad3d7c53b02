use std::borrow::Cow;
use std::path::Path;

use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::{debug, warn};

use super::operation::{Operation, Outcome};
use crate::filesystem::{FileSystem, FilesystemError};

const OPERATIONS_KEY: &str = "operations";

/// An ordered list of operations replayed against one store.
///
/// ```yaml
/// operations:
///   - mkdir: /a/b/c
///   - add: { path: /a/x.txt, content: Hello }
///   - ls: /a
///   - read: /a/x.txt
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    operations: Vec<Operation>,
}

/// The result of running one operation of a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<'a> {
    pub index: usize,
    pub operation: &'a Operation,
    pub result: Result<Outcome, FilesystemError>,
}

impl Step<'_> {
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }

    pub fn check(self) -> Result<Outcome, ScriptRunError> {
        self.result.context(ScriptRunSnafu {
            index: self.index,
            operation: self.operation.to_string(),
        })
    }
}

impl Script {
    pub async fn read(path: impl AsRef<Path>) -> Result<Self, ScriptLoadError> {
        let path = path.as_ref();
        let file_path = path.display().to_string();

        debug!("Reading script file: {}", file_path);
        let bytes = compio::fs::read(path).await.context(ReadSnafu {
            file_path: file_path.clone(),
        })?;
        debug!("Successfully read script file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu { file_path })?;
        contents.as_str().try_into()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Applies the operations lazily, one per yielded step. Stopping the
    /// iteration early leaves the remaining operations unapplied.
    pub fn steps<'a>(
        &'a self,
        filesystem: &'a mut FileSystem,
    ) -> impl Iterator<Item = Step<'a>> + 'a {
        self.operations
            .iter()
            .enumerate()
            .map(move |(index, operation)| {
                debug!("Running operation #{}: {}", index, operation);
                Step {
                    index,
                    operation,
                    result: operation.apply(filesystem),
                }
            })
    }

    /// Runs every operation, stopping at the first one that fails.
    pub fn run(&self, filesystem: &mut FileSystem) -> Result<Vec<Outcome>, ScriptRunError> {
        self.steps(filesystem).map(Step::check).collect()
    }

    fn parse_operations(top_level: &Yaml) -> Result<Vec<Operation>, ScriptLoadError> {
        let mapping = top_level.as_mapping().context(TopLevelNotMapSnafu)?;

        let Some(operations) =
            mapping.get(&Yaml::Value(Scalar::String(Cow::Borrowed(OPERATIONS_KEY))))
        else {
            return Ok(Vec::new());
        };
        let entries = operations
            .as_sequence()
            .context(OperationsNotSequenceSnafu)?;

        Ok(entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let operation = Operation::from_yaml(entry);
                if operation.is_none() {
                    warn!("Skipping invalid operation #{}: {:?}", index, entry);
                }
                operation
            })
            .collect())
    }
}

impl TryFrom<&str> for Script {
    type Error = ScriptLoadError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let top_level = documents.first().context(MalformedScriptSnafu)?;

        let operations = Self::parse_operations(top_level)?;
        debug!("Parsed {} operations", operations.len());

        Ok(Script { operations })
    }
}

impl From<Vec<Operation>> for Script {
    fn from(operations: Vec<Operation>) -> Self {
        Self { operations }
    }
}

#[derive(Debug, Snafu)]
pub enum ScriptLoadError {
    #[snafu(display("Failed to read the script file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Script file {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the script"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted script"))]
    MalformedScript,
    #[snafu(display("Top level of the script should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Operations section should be a list"))]
    OperationsNotSequence,
}

#[derive(Debug, Snafu)]
#[snafu(display("Operation #{} ({}) failed", index, operation))]
pub struct ScriptRunError {
    pub index: usize,
    pub operation: String,
    pub source: FilesystemError,
}
