// src/compiler.rs
use crate::error::ReportError;
use crate::settings::ReportSettings;
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use texreport_core::items::Attachment;
use texreport_core::BuildTracker;
use texreport_process::has_write_access;
use texreport_traits::TexCompiler;

/// Lays out the working directory of a report and turns it into the final PDF.
#[derive(Debug, Clone)]
pub struct ReportCompiler {
    tex_compiler: Arc<dyn TexCompiler>,
}

impl ReportCompiler {
    pub fn new(tex_compiler: Arc<dyn TexCompiler>) -> Self {
        Self { tex_compiler }
    }

    pub fn tex_compiler(&self) -> &Arc<dyn TexCompiler> {
        &self.tex_compiler
    }

    /// Writes template, content and attachments into the tracker's working
    /// directory, compiles and copies the PDF to the report location.
    ///
    /// Returns the final report path.
    pub fn compile_report(
        &self,
        tex: &str,
        attachments: &[Attachment],
        settings: &ReportSettings,
        tracker: &BuildTracker,
    ) -> Result<PathBuf, ReportError> {
        let (working_dir, report_path, report_name) = report_paths(tracker)?;
        check_output_writable(report_path)?;

        let tex_file = copy_template(settings, working_dir, &format!("{}.tex", report_name))?;

        let content_file = working_dir.join(format!("{}.tex", settings.content_file_name));
        fs::write(&content_file, tex)?;
        debug!("Wrote content file {}", content_file.display());

        for attachment in attachments {
            let target = attachment.copy_to_working_directory(working_dir)?;
            debug!(
                "Copied attachment {} to {}",
                attachment.full_path().display(),
                target.display()
            );
        }

        settings.implement(&tex_file)?;

        info!(
            "Compiling {} with {} ({} passes)",
            tex_file.display(),
            self.tex_compiler.name(),
            settings.number_of_compilations
        );
        let created_pdf = self.tex_compiler.compile(&tex_file, settings.number_of_compilations)?;
        if !created_pdf.is_file() {
            return Err(ReportError::Compilation {
                working_directory: working_dir.to_path_buf(),
            });
        }

        check_output_writable(report_path)?;
        fs::copy(&created_pdf, report_path)?;
        info!("Report created at {}", report_path.display());
        Ok(report_path.to_path_buf())
    }
}

fn report_paths(tracker: &BuildTracker) -> Result<(&Path, &Path, &str), ReportError> {
    let missing =
        || ReportError::Output("The build tracker is not bound to a report location.".into());
    let working_dir = tracker.working_directory().ok_or_else(missing)?;
    let report_path = tracker.report_full_path().ok_or_else(missing)?;
    let report_name = tracker.report_file_name().ok_or_else(missing)?;
    Ok((working_dir, report_path, report_name))
}

/// An existing report must be openable for writing, otherwise its folder must accept new files.
fn check_output_writable(report_path: &Path) -> Result<(), ReportError> {
    if report_path.exists() {
        OpenOptions::new().write(true).open(report_path).map_err(|e| {
            let path = report_path.display();
            ReportError::Output(format!("The file '{}' is not writable: {}", path, e))
        })?;
        return Ok(());
    }
    let writable = report_path.parent().is_some_and(has_write_access);
    if writable {
        Ok(())
    } else {
        Err(ReportError::Output(format!(
            "The file '{}' cannot be created in a write protected folder.",
            report_path.display()
        )))
    }
}

/// Copies every file of the template folder, renaming the layout file to `file_name`.
fn copy_template(
    settings: &ReportSettings,
    working_dir: &Path,
    file_name: &str,
) -> Result<PathBuf, ReportError> {
    let template_name = settings.template_name()?;
    for entry in fs::read_dir(&settings.template_folder)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let source_name = entry.file_name();
        let target_name = if source_name.to_str() == Some(template_name.as_str()) {
            file_name.into()
        } else {
            source_name
        };
        fs::copy(entry.path(), working_dir.join(target_name))?;
    }
    Ok(working_dir.join(file_name))
}
