//! Process-backed toolchain collaborators.
//!
//! This crate provides the implementations of the `TexCompiler` and
//! `ImageConverter` traits from texreport-traits that shell out to an
//! installed TeX distribution.
//!
//! ## Available Collaborators
//!
//! - [`TexifyCompiler`]: compiles `.tex` files with `texify`
//! - [`GhostscriptConverter`]: rasterizes PDFs with `mgs` or `gs`
//!
//! Both locate their executables through [`CompilerConfiguration`].

mod config;
mod ghostscript;
mod texify;

pub use config::{CompilerConfiguration, TEX_DIR_VARIABLE};
pub use ghostscript::GhostscriptConverter;
pub use texify::TexifyCompiler;

use std::fs;
use std::path::Path;

/// Checks that `directory` accepts new files by creating and removing a probe file.
pub fn has_write_access(directory: &Path) -> bool {
    let probe = directory.join(".texreport-write-probe");
    match fs::write(&probe, b"") {
        Ok(()) => {
            let _ = fs::remove_file(&probe);
            true
        }
        Err(_) => false,
    }
}
