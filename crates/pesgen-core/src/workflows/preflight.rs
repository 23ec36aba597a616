use crate::engine::config::ScanConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::Path;
use tracing::{debug, info, instrument};

#[instrument(skip_all, name = "preflight_workflow")]
pub fn run(config: &ScanConfig, reporter: &ProgressReporter) -> Result<(), EngineError> {
    reporter.phase("Checking paths", || {
        check_directory(config.repository_path(), "calculator repository")?;
        reporter.report(Progress::Message(format!(
            "Calculator repository: {}",
            config.repository_path().display()
        )));
        check_file(config.parameter_file_path(), "parameter file")?;
        reporter.report(Progress::Message(format!(
            "Parameter file: {}",
            config.parameter_file_path().display()
        )));
        info!("Referenced paths exist and have the expected kind.");
        Ok(())
    })
}

fn check_directory(path: &Path, kind: &'static str) -> Result<(), EngineError> {
    debug!("Checking {} at {:?}", kind, path);
    if !path.exists() {
        return Err(EngineError::MissingPath {
            kind,
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(EngineError::WrongPathKind {
            kind,
            expected: "directory",
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn check_file(path: &Path, kind: &'static str) -> Result<(), EngineError> {
    debug!("Checking {} at {:?}", kind, path);
    if !path.exists() {
        return Err(EngineError::MissingPath {
            kind,
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(EngineError::WrongPathKind {
            kind,
            expected: "regular file",
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
