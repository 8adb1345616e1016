//! TexCompiler trait for abstracting the external TeX toolchain.
//!
//! The report pipeline only needs "compile this file, tell me where the PDF
//! should be". Whether the PDF really exists afterwards is checked by the
//! caller, so implementations are free to swallow toolchain failures.

use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Error type for compiler and converter invocations.
#[derive(Error, Debug, Clone)]
pub enum CompileError {
    #[error("The file '{0}' does not exist")]
    NotFound(PathBuf),

    #[error("The file '{path}' must have the extension .{expected}")]
    InvalidExtension { path: PathBuf, expected: &'static str },

    #[error("The file '{0}' must be specified with its full path")]
    MissingDirectory(PathBuf),

    #[error("The TeX installation is corrupted or not present: {0}")]
    Installation(String),

    #[error("The working directory '{0}' is write protected or does not exist")]
    WriteProtected(PathBuf),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CompileError {
    fn from(err: std::io::Error) -> Self {
        CompileError::Io(err.to_string())
    }
}

/// Checks an input file the way every toolchain invocation needs it:
/// it must exist, carry `extension` and live in a directory.
///
/// Returns the containing directory and the file stem.
pub fn validate_input(
    path: &Path,
    extension: &'static str,
) -> Result<(PathBuf, String), CompileError> {
    if !path.is_file() {
        return Err(CompileError::NotFound(path.to_path_buf()));
    }
    if path.extension().and_then(|e| e.to_str()) != Some(extension) {
        return Err(CompileError::InvalidExtension {
            path: path.to_path_buf(),
            expected: extension,
        });
    }
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| CompileError::MissingDirectory(path.to_path_buf()))?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CompileError::NotFound(path.to_path_buf()))?;
    Ok((directory.to_path_buf(), stem.to_string()))
}

/// Compiles a `.tex` file into a PDF.
///
/// # Implementations
///
/// - `TexifyCompiler` (texreport-process): runs the installed toolchain
/// - `RecordingTexCompiler`: writes a placeholder PDF and records the call
pub trait TexCompiler: Send + Sync + Debug {
    /// Compiles `tex_file` `passes` times and returns the path the PDF is expected at.
    fn compile(&self, tex_file: &Path, passes: u32) -> Result<PathBuf, CompileError>;

    /// Returns a human-readable name for this compiler (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// One recorded `compile` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileCall {
    pub tex_file: PathBuf,
    pub passes: u32,
    /// Content of the tex file at the time of the call.
    pub source: String,
}

/// A compiler that records its calls and writes a small placeholder PDF
/// next to the input instead of invoking a toolchain.
///
/// Useful for dry runs and tests. With `produce_output(false)` it behaves
/// like a toolchain that failed silently: no PDF appears.
#[derive(Debug)]
pub struct RecordingTexCompiler {
    produce_output: bool,
    calls: Mutex<Vec<CompileCall>>,
}

impl Default for RecordingTexCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingTexCompiler {
    pub fn new() -> Self {
        Self {
            produce_output: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn produce_output(mut self, produce: bool) -> Self {
        self.produce_output = produce;
        self
    }

    /// Returns the recorded calls.
    ///
    /// Returns an empty list if the lock is poisoned.
    pub fn calls(&self) -> Vec<CompileCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl TexCompiler for RecordingTexCompiler {
    fn compile(&self, tex_file: &Path, passes: u32) -> Result<PathBuf, CompileError> {
        let (directory, stem) = validate_input(tex_file, "tex")?;
        let source = std::fs::read_to_string(tex_file)?;
        let pdf = directory.join(format!("{}.pdf", stem));
        if self.produce_output {
            std::fs::write(&pdf, b"%PDF-1.4\n%%EOF\n")?;
        }
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(CompileCall {
                tex_file: tex_file.to_path_buf(),
                passes,
                source,
            });
        }
        Ok(pdf)
    }

    fn name(&self) -> &'static str {
        "RecordingTexCompiler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = validate_input(&dir.path().join("missing.tex"), "tex");
        assert!(matches!(result, Err(CompileError::NotFound(_))));
    }

    #[test]
    fn test_validate_input_rejects_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("report.txt");
        std::fs::write(&file, "x").unwrap();
        let result = validate_input(&file, "tex");
        assert!(matches!(result, Err(CompileError::InvalidExtension { expected: "tex", .. })));
    }

    #[test]
    fn test_validate_input_returns_directory_and_stem() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("report.tex");
        std::fs::write(&file, "x").unwrap();
        let (directory, stem) = validate_input(&file, "tex").unwrap();
        assert_eq!(directory, dir.path());
        assert_eq!(stem, "report");
    }

    #[test]
    fn test_recording_compiler_writes_pdf_and_records() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("report.tex");
        std::fs::write(&file, "\\documentclass{article}").unwrap();

        let compiler = RecordingTexCompiler::new();
        let pdf = compiler.compile(&file, 3).unwrap();

        assert_eq!(pdf, dir.path().join("report.pdf"));
        assert!(pdf.exists());
        let calls = compiler.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].passes, 3);
        assert_eq!(calls[0].source, "\\documentclass{article}");
    }

    #[test]
    fn test_recording_compiler_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("report.tex");
        std::fs::write(&file, "x").unwrap();

        let compiler = RecordingTexCompiler::new().produce_output(false);
        let pdf = compiler.compile(&file, 1).unwrap();
        assert!(!pdf.exists());
    }
}
