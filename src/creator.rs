// src/creator.rs
use crate::artifacts::ArtifactsManager;
use crate::compiler::ReportCompiler;
use crate::error::ReportError;
use crate::events::{ReportEvent, ReportEventSender};
use crate::settings::ReportSettings;
use crate::tracker_factory::BuildTrackerFactory;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use texreport_core::items::Attachment;
use texreport_core::{BuildTracker, BuilderRepository, NodeRef};
use tokio::task;

/// Runs a complete report: build pass, compilation, artifacts and cleanup.
///
/// The build pass runs on the calling task. Everything touching the file
/// system or a subprocess runs on the blocking pool.
#[derive(Debug, Clone)]
pub struct ReportCreator {
    repository: Arc<BuilderRepository>,
    compiler: ReportCompiler,
    artifacts: ArtifactsManager,
    tracker_factory: BuildTrackerFactory,
    events: Option<ReportEventSender>,
}

impl ReportCreator {
    pub(crate) fn new(
        repository: Arc<BuilderRepository>,
        compiler: ReportCompiler,
        artifacts: ArtifactsManager,
        tracker_factory: BuildTrackerFactory,
        events: Option<ReportEventSender>,
    ) -> Self {
        Self {
            repository,
            compiler,
            artifacts,
            tracker_factory,
            events,
        }
    }

    pub fn repository(&self) -> &Arc<BuilderRepository> {
        &self.repository
    }

    pub fn tracker_factory(&self) -> &BuildTrackerFactory {
        &self.tracker_factory
    }

    /// Reports `nodes` into the PDF at `pdf_full_path`, using a fresh working directory next to it.
    pub async fn report_to_pdf(
        &self,
        pdf_full_path: impl AsRef<Path>,
        settings: &ReportSettings,
        nodes: &[NodeRef],
    ) -> Result<PathBuf, ReportError> {
        settings.validate()?;
        let tracker = self.tracker_factory.create_for(pdf_full_path, None)?;
        self.run(tracker, settings, nodes).await
    }

    /// Like [`Self::report_to_pdf`], with a tracker the caller prepared.
    pub async fn report_with_tracker(
        &self,
        tracker: BuildTracker,
        settings: &ReportSettings,
        nodes: &[NodeRef],
    ) -> Result<PathBuf, ReportError> {
        settings.validate()?;
        self.run(tracker, settings, nodes).await
    }

    async fn run(
        &self,
        tracker: BuildTracker,
        settings: &ReportSettings,
        nodes: &[NodeRef],
    ) -> Result<PathBuf, ReportError> {
        let report_path = tracker
            .report_full_path()
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                ReportError::Output("The build tracker is not bound to a report location.".into())
            })?;

        self.publish(ReportEvent::CreationStarted(report_path.clone()));
        let result = self.create(tracker, settings, nodes).await;
        self.publish(ReportEvent::CreationFinished(report_path));
        result
    }

    async fn create(
        &self,
        mut tracker: BuildTracker,
        settings: &ReportSettings,
        nodes: &[NodeRef],
    ) -> Result<PathBuf, ReportError> {
        let start = Instant::now();
        info!("Creating report with {} top-level nodes", nodes.len());

        self.repository.report_all(nodes, &mut tracker)?;
        let attachments: Vec<Attachment> = tracker.attachments().cloned().collect();
        let tex = tracker.tex().to_string();
        debug!(
            "Build pass produced {} bytes of TeX and {} attachments",
            tex.len(),
            attachments.len()
        );

        let compiler = self.compiler.clone();
        let artifacts = self.artifacts.clone();
        let settings = settings.clone();
        let report = task::spawn_blocking(move || -> Result<PathBuf, ReportError> {
            let report = compiler.compile_report(&tex, &attachments, &settings, &tracker)?;
            if settings.save_artifacts {
                artifacts.save_artifacts(&tracker)?;
            }
            if settings.delete_working_dir {
                tracker.delete_working_directory();
            }
            Ok(report)
        })
        .await??;

        info!("Report {} finished in {:.2?}", report.display(), start.elapsed());
        Ok(report)
    }

    fn publish(&self, event: ReportEvent) {
        if let Some(sender) = &self.events {
            if let Err(e) = sender.try_send(event) {
                debug!("Report event was not delivered: {}", e);
            }
        }
    }
}
