use memfs::FileSystem;
use memfs::script::{Script, ScriptLoadError, ScriptRunError};
use snafu::prelude::*;
use tracing::info;

use crate::application::RuntimeConfig;
use crate::application::report;

pub struct Application;

impl Application {
    pub async fn run(runtime_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let runtime_config: RuntimeConfig = runtime_config.into();
        let script = Script::read(&runtime_config.script)
            .await
            .context(ScriptLoadSnafu)?;
        info!(
            "Loaded {} operations from {}",
            script.len(),
            runtime_config.script.display()
        );

        let mut filesystem = FileSystem::new();
        let mut failures = 0;
        for step in script.steps(&mut filesystem) {
            report::print_step(&step);
            if step.is_failure() {
                failures += 1;
                if runtime_config.fail_fast {
                    step.check().context(ScriptRunSnafu)?;
                }
            }
        }

        info!(
            "Replayed {} operations, {} failed",
            script.len(),
            failures
        );
        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the script"))]
    ScriptLoadError { source: ScriptLoadError },
    #[snafu(display("Script aborted on a failed operation"))]
    ScriptRunError { source: ScriptRunError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn script_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "{}", contents).expect("Failed to write to temp file");
        file
    }

    fn config(script: &NamedTempFile, fail_fast: bool) -> RuntimeConfig {
        RuntimeConfig {
            script: script.path().to_path_buf(),
            fail_fast,
        }
    }

    const FAILING_SCRIPT: &str = r#"
operations:
  - mkdir: /a
  - add: { path: /a, content: x }
  - ls: /a
"#;

    #[compio::test]
    async fn run_fails_on_missing_script() {
        let result = Application::run(RuntimeConfig {
            script: PathBuf::from("does-not-exist.yaml"),
            fail_fast: false,
        })
        .await;
        assert!(matches!(result, Err(ApplicationError::ScriptLoadError { .. })));
    }

    #[compio::test]
    async fn run_reports_failures_without_aborting_by_default() {
        let file = script_file(FAILING_SCRIPT);
        let result = Application::run(config(&file, false)).await;
        assert!(result.is_ok());
    }

    #[compio::test]
    async fn run_aborts_on_failure_with_fail_fast() {
        let file = script_file(FAILING_SCRIPT);
        let result = Application::run(config(&file, true)).await;

        match result {
            Err(ApplicationError::ScriptRunError { source }) => {
                assert_eq!(source.index, 1);
                assert_eq!(source.operation, "add /a");
            }
            other => panic!("Expected ScriptRunError, got {:?}", other),
        }
    }
}
