//! Ghostscript-based [`ImageConverter`].

use crate::{has_write_access, CompilerConfiguration};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use texreport_traits::{validate_input, CompileError, ImageConverter, ImageFormat};

/// Rasterizes a PDF next to itself with `mgs` (or `gs`).
///
/// Like [`crate::TexifyCompiler`], a failing subprocess is logged and the
/// expected output path is still returned.
#[derive(Debug, Clone, Default)]
pub struct GhostscriptConverter {
    configuration: CompilerConfiguration,
}

impl GhostscriptConverter {
    pub fn new(configuration: CompilerConfiguration) -> Self {
        Self { configuration }
    }

    fn arguments(format: ImageFormat, output: &str, resolution: u32, input: &str) -> Vec<String> {
        vec![
            format!("-sDEVICE={}", format.device()),
            format!("-sOutputFile={}", output),
            format!("-r{}", resolution),
            "-q".to_string(),
            "-dBATCH".to_string(),
            "-dNOPAUSE".to_string(),
            input.to_string(),
        ]
    }
}

impl ImageConverter for GhostscriptConverter {
    fn convert_pdf(
        &self,
        pdf_file: &Path,
        format: ImageFormat,
        resolution: u32,
    ) -> Result<PathBuf, CompileError> {
        let (directory, stem) = validate_input(pdf_file, "pdf")?;
        let program = self.configuration.ghostscript()?;
        if !has_write_access(&directory) {
            return Err(CompileError::WriteProtected(directory));
        }
        let output = format!("{}.{}", stem, format.extension());
        let input = format!("{}.pdf", stem);
        debug!("Converting {} to {} at {} dpi", pdf_file.display(), format, resolution);

        let mut command = Command::new(&program);
        command
            .args(Self::arguments(format, &output, resolution, &input))
            .current_dir(&directory)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        if let Some(path) = self.configuration.child_path() {
            command.env("PATH", path);
        }
        match command.output() {
            Ok(result) if result.status.success() => {}
            Ok(result) => warn!(
                "{} exited with {}: {}",
                program.display(),
                result.status,
                String::from_utf8_lossy(&result.stderr).trim()
            ),
            Err(e) => warn!("{} could not be started: {}", program.display(), e),
        }
        Ok(directory.join(output))
    }

    fn name(&self) -> &'static str {
        "GhostscriptConverter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_arguments() {
        assert_eq!(
            GhostscriptConverter::arguments(ImageFormat::Png, "plot.png", 600, "plot.pdf")
                .join(" "),
            "-sDEVICE=pngalpha -sOutputFile=plot.png -r600 -q -dBATCH -dNOPAUSE plot.pdf"
        );
        let jpg = GhostscriptConverter::arguments(ImageFormat::Jpg, "a.jpg", 144, "a.pdf");
        assert!(jpg[0].ends_with("jpeg"));
    }

    #[test]
    fn test_rejects_non_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plot.png");
        fs::write(&file, "x").unwrap();
        let result = GhostscriptConverter::default().convert_pdf(&file, ImageFormat::Png, 144);
        assert!(matches!(result, Err(CompileError::InvalidExtension { expected: "pdf", .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_converter_still_returns_expected_path() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        let script = bin.join("mgs");
        fs::write(&script, "#!/bin/sh\nexit 1\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let pdf = dir.path().join("plot.pdf");
        fs::write(&pdf, "%PDF").unwrap();

        let configuration = CompilerConfiguration::default().with_bin_dir(&bin);
        let converter = GhostscriptConverter::new(configuration);
        let image = converter.convert_pdf(&pdf, ImageFormat::Bmp, 72).unwrap();
        assert_eq!(image, dir.path().join("plot.bmp"));
        assert!(!image.exists());
    }
}
