// src/artifacts.rs
use crate::error::ReportError;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use texreport_core::items::{FIGURES_FOLDER, PLOTS_FOLDER};
use texreport_core::BuildTracker;
use texreport_traits::{ImageConverter, ImageFormat};

/// Suffix of the folder artifacts are saved to, next to the report.
pub const ARTIFACT_OUTPUT_FOLDER: &str = "Files";

/// Working-directory folders holding artifacts.
pub const ARTIFACT_FOLDERS: [&str; 2] = [PLOTS_FOLDER, FIGURES_FOLDER];

const ARTIFACT_EXTENSIONS: [&str; 2] = ["pdf", "png"];

/// Resolution PDF artifacts are rasterized with.
pub const ARTIFACT_RESOLUTION: u32 = 600;

/// Keeps the plots and figures of a report next to it after the working directory is gone.
#[derive(Debug, Clone)]
pub struct ArtifactsManager {
    image_converter: Arc<dyn ImageConverter>,
}

impl ArtifactsManager {
    pub fn new(image_converter: Arc<dyn ImageConverter>) -> Self {
        Self { image_converter }
    }

    /// Copies the artifacts into `<report folder>/<report name>_Files` and adds
    /// a PNG for every PDF.
    ///
    /// Returns the output folder.
    pub fn save_artifacts(&self, tracker: &BuildTracker) -> Result<PathBuf, ReportError> {
        let missing =
            || ReportError::Output("The build tracker is not bound to a report location.".into());
        let working_dir = tracker.working_directory().ok_or_else(missing)?;
        let report_folder = tracker.report_folder().ok_or_else(missing)?;
        let report_name = tracker.report_file_name().ok_or_else(missing)?;

        let output_folder =
            report_folder.join(format!("{}_{}", report_name, ARTIFACT_OUTPUT_FOLDER));
        if output_folder.exists() {
            if let Err(e) = fs::remove_dir_all(&output_folder) {
                warn!("Could not clear artifact folder {}: {}", output_folder.display(), e);
            }
        }
        fs::create_dir_all(&output_folder)?;

        for folder_name in ARTIFACT_FOLDERS {
            let source = working_dir.join(folder_name);
            if !source.is_dir() {
                continue;
            }
            let target = output_folder.join(folder_name);
            fs::create_dir_all(&target)?;
            for artifact in artifacts_in(&source)? {
                let Some(file_name) = artifact.file_name() else {
                    continue;
                };
                let copied = target.join(file_name);
                fs::copy(&artifact, &copied)?;
                debug!("Saved artifact {}", copied.display());
                if has_extension(&copied, "pdf") {
                    self.image_converter
                        .convert_pdf(&copied, ImageFormat::Png, ARTIFACT_RESOLUTION)?;
                }
            }
        }
        Ok(output_folder)
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

fn artifacts_in(folder: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let mut artifacts = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && ARTIFACT_EXTENSIONS.iter().any(|ext| has_extension(&path, ext)) {
            artifacts.push(path);
        }
    }
    artifacts.sort();
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use texreport_traits::RecordingImageConverter;

    #[test]
    fn test_save_artifacts_copies_and_converts() {
        let dir = TempDir::new().unwrap();
        let working = dir.path().join("work");
        fs::create_dir_all(working.join(PLOTS_FOLDER)).unwrap();
        fs::create_dir_all(working.join(FIGURES_FOLDER)).unwrap();
        fs::write(working.join(PLOTS_FOLDER).join("curve.pdf"), b"%PDF").unwrap();
        fs::write(working.join(PLOTS_FOLDER).join("notes.txt"), b"x").unwrap();
        fs::write(working.join(FIGURES_FOLDER).join("logo.PNG"), b"png").unwrap();
        let tracker = BuildTracker::for_report(&working, dir.path().join("study.pdf"));
        let converter = Arc::new(RecordingImageConverter::new());

        let output = ArtifactsManager::new(converter.clone()).save_artifacts(&tracker).unwrap();

        assert_eq!(output, dir.path().join("study_Files"));
        assert!(output.join(PLOTS_FOLDER).join("curve.pdf").is_file());
        assert!(!output.join(PLOTS_FOLDER).join("notes.txt").exists());
        assert!(output.join(FIGURES_FOLDER).join("logo.PNG").is_file());
        let calls = converter.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].pdf_file, output.join(PLOTS_FOLDER).join("curve.pdf"));
        assert_eq!(calls[0].format, ImageFormat::Png);
        assert_eq!(calls[0].resolution, 600);
    }

    #[test]
    fn test_save_artifacts_recreates_output_folder() {
        let dir = TempDir::new().unwrap();
        let working = dir.path().join("work");
        fs::create_dir_all(&working).unwrap();
        let stale = dir.path().join("study_Files").join("old.png");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, b"old").unwrap();
        let tracker = BuildTracker::for_report(&working, dir.path().join("study.pdf"));

        let output = ArtifactsManager::new(Arc::new(RecordingImageConverter::new()))
            .save_artifacts(&tracker)
            .unwrap();

        assert!(output.is_dir());
        assert!(!stale.exists());
    }
}
