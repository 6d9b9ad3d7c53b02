//! Scripted replay of file-system operations.
//!
//! A script is a YAML document listing operations under an `operations` key.
//! Entries that cannot be understood are skipped with a warning; structural
//! problems with the document fail loading.

mod operation;
#[allow(clippy::module_inception)]
mod script;

pub use operation::{Operation, Outcome};
pub use script::{Script, ScriptLoadError, ScriptRunError, Step};
