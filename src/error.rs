// src/error.rs
use std::path::PathBuf;
use texreport_core::{BuildError, RegistryError};
use texreport_traits::CompileError;
use thiserror::Error;

/// The error type for a whole report run: settings, build pass, compilation and file handling.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Build failed: {0}")]
    Build(#[from] BuildError),

    #[error("Builder registration failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("Report settings are invalid: {0}")]
    Settings(String),

    #[error("Output location is invalid: {0}")]
    Output(String),

    #[error(
        "Report could not be created. Please see log for details located under '{}'",
        .working_directory.display()
    )]
    Compilation { working_directory: PathBuf },

    #[error("Toolchain invocation failed: {0}")]
    Compiler(#[from] CompileError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings could not be parsed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for ReportError {
    fn from(e: tokio::task::JoinError) -> Self {
        ReportError::Task(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compilation_message_names_working_directory() {
        let err = ReportError::Compilation {
            working_directory: PathBuf::from("/out/abc"),
        };
        assert_eq!(
            err.to_string(),
            "Report could not be created. Please see log for details located under '/out/abc'"
        );
    }

    #[test]
    fn test_build_error_converts() {
        let err: ReportError = BuildError::BuilderNotFound("Widget").into();
        assert!(matches!(err, ReportError::Build(BuildError::BuilderNotFound("Widget"))));
    }
}
