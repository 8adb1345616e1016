//! Locating the TeX toolchain executables.

use log::debug;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use texreport_traits::CompileError;

/// Environment variable naming the TeX installation directory.
pub const TEX_DIR_VARIABLE: &str = "TEXREPORT_TEX_DIR";

const TEXIFY: &str = "texify";
const GHOSTSCRIPT: &str = "mgs";
const GHOSTSCRIPT_FALLBACK: &str = "gs";

/// Where the toolchain lives and what its executables are called.
///
/// With a bin directory, executables are looked up there only. Without one
/// they are searched on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfiguration {
    bin_dir: Option<PathBuf>,
    texify: String,
    ghostscript: String,
    ghostscript_fallback: Option<String>,
}

impl Default for CompilerConfiguration {
    fn default() -> Self {
        Self {
            bin_dir: None,
            texify: TEXIFY.to_string(),
            ghostscript: GHOSTSCRIPT.to_string(),
            ghostscript_fallback: Some(GHOSTSCRIPT_FALLBACK.to_string()),
        }
    }
}

impl CompilerConfiguration {
    /// Reads [`TEX_DIR_VARIABLE`]; its `bin` folder becomes the bin directory.
    pub fn from_env() -> Self {
        match env::var_os(TEX_DIR_VARIABLE).filter(|dir| !dir.is_empty()) {
            Some(dir) => {
                let bin = PathBuf::from(dir).join("bin");
                debug!("Using TeX executables from {}", bin.display());
                Self::default().with_bin_dir(bin)
            }
            None => Self::default(),
        }
    }

    pub fn with_bin_dir(mut self, bin_dir: impl Into<PathBuf>) -> Self {
        self.bin_dir = Some(bin_dir.into());
        self
    }

    pub fn with_texify(mut self, program: impl Into<String>) -> Self {
        self.texify = program.into();
        self
    }

    pub fn with_ghostscript(mut self, program: impl Into<String>) -> Self {
        self.ghostscript = program.into();
        self
    }

    pub fn without_ghostscript_fallback(mut self) -> Self {
        self.ghostscript_fallback = None;
        self
    }

    pub fn bin_dir(&self) -> Option<&Path> {
        self.bin_dir.as_deref()
    }

    pub fn texify(&self) -> Result<PathBuf, CompileError> {
        self.locate(&self.texify).ok_or_else(|| not_found(&self.texify))
    }

    /// The Ghostscript executable, falling back to plain `gs`.
    pub fn ghostscript(&self) -> Result<PathBuf, CompileError> {
        self.locate(&self.ghostscript)
            .or_else(|| self.ghostscript_fallback.as_deref().and_then(|p| self.locate(p)))
            .ok_or_else(|| not_found(&self.ghostscript))
    }

    /// `PATH` for child processes: the bin directory first, then the inherited value.
    pub fn child_path(&self) -> Option<OsString> {
        let bin_dir = self.bin_dir.as_ref()?;
        let inherited = env::var_os("PATH").unwrap_or_default();
        let paths = std::iter::once(bin_dir.clone()).chain(env::split_paths(&inherited));
        env::join_paths(paths).ok()
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        match &self.bin_dir {
            Some(dir) => {
                let candidates = [
                    dir.join(program),
                    dir.join(format!("{}{}", program, env::consts::EXE_SUFFIX)),
                ];
                candidates.into_iter().find(|candidate| candidate.is_file())
            }
            None => which::which(program).ok(),
        }
    }
}

fn not_found(program: &str) -> CompileError {
    CompileError::Installation(format!("{} could not be found", program))
}
