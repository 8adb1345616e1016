//! `texify`-based [`TexCompiler`].

use crate::{has_write_access, CompilerConfiguration};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use texreport_traits::{validate_input, CompileError, TexCompiler};

const ARGUMENTS: [&str; 4] = ["--batch", "--pdf", "--quiet", "--tex-option=-shell-escape"];

/// Runs `texify` in the directory of the `.tex` file.
///
/// Toolchain failures are logged, not returned: the caller decides whether
/// a compilation failed by looking for the PDF.
#[derive(Debug, Clone, Default)]
pub struct TexifyCompiler {
    configuration: CompilerConfiguration,
}

impl TexifyCompiler {
    pub fn new(configuration: CompilerConfiguration) -> Self {
        Self { configuration }
    }

    pub fn configuration(&self) -> &CompilerConfiguration {
        &self.configuration
    }

    fn command(&self, program: &Path, directory: &Path, file_name: &str) -> Command {
        let mut command = Command::new(program);
        command
            .args(ARGUMENTS)
            .arg(file_name)
            .current_dir(directory)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        if let Some(path) = self.configuration.child_path() {
            command.env("PATH", path);
        }
        command
    }
}

impl TexCompiler for TexifyCompiler {
    fn compile(&self, tex_file: &Path, passes: u32) -> Result<PathBuf, CompileError> {
        let (directory, stem) = validate_input(tex_file, "tex")?;
        let program = self.configuration.texify()?;
        if !has_write_access(&directory) {
            return Err(CompileError::WriteProtected(directory));
        }
        let file_name = format!("{}.tex", stem);

        for pass in 1..=passes {
            debug!("texify pass {}/{} on {}", pass, passes, tex_file.display());
            match self.command(&program, &directory, &file_name).output() {
                Ok(output) if output.status.success() => {}
                Ok(output) => warn!(
                    "texify pass {} exited with {}: {}",
                    pass,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
                Err(e) => {
                    warn!("texify could not be started: {}", e);
                    break;
                }
            }
        }
        Ok(directory.join(format!("{}.pdf", stem)))
    }

    fn name(&self) -> &'static str {
        "TexifyCompiler"
    }
}
