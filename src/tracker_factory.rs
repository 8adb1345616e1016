// src/tracker_factory.rs
use crate::error::ReportError;
use log::debug;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use texreport_core::{BuildTracker, Label};
use texreport_process::has_write_access;

type NameSource = Arc<dyn Fn() -> String + Send + Sync>;

/// Creates build trackers for a target PDF, each with its own working directory
/// next to the output file.
#[derive(Clone)]
pub struct BuildTrackerFactory {
    working_dir_name: NameSource,
}

impl Default for BuildTrackerFactory {
    fn default() -> Self {
        Self {
            working_dir_name: Arc::new(|| Label::mint().as_str().to_string()),
        }
    }
}

impl fmt::Debug for BuildTrackerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildTrackerFactory").finish_non_exhaustive()
    }
}

impl BuildTrackerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the generator for working directory names.
    pub fn with_working_dir_name<F>(mut self, name: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.working_dir_name = Arc::new(name);
        self
    }

    /// Creates the working directory for `pdf_full_path` and a tracker bound to it.
    ///
    /// `working_dir_name` overrides the generated directory name for this call.
    pub fn create_for(
        &self,
        pdf_full_path: impl AsRef<Path>,
        working_dir_name: Option<&str>,
    ) -> Result<BuildTracker, ReportError> {
        let pdf_full_path = pdf_full_path.as_ref();
        let output_dir = pdf_full_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                ReportError::Output("The pdf file name must be specified with full path.".into())
            })?;
        if !output_dir.is_dir() {
            return Err(ReportError::Output(
                "The specified output directory does not exist.".into(),
            ));
        }
        let has_stem = pdf_full_path
            .file_stem()
            .is_some_and(|stem| !stem.is_empty());
        if !has_stem {
            return Err(ReportError::Output(
                "The pdf file name is empty. A pdf file must be specified.".into(),
            ));
        }
        if !has_write_access(output_dir) {
            return Err(ReportError::Output(
                "The output directory is write protected or does not exist.".into(),
            ));
        }

        let name = working_dir_name.map_or_else(|| (self.working_dir_name)(), str::to_string);
        let working_dir = output_dir.join(name);
        fs::create_dir_all(&working_dir)?;
        debug!("Created working directory {}", working_dir.display());

        Ok(BuildTracker::for_report(working_dir, pdf_full_path))
    }
}
