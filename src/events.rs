// src/events.rs
use std::path::{Path, PathBuf};

/// Lifecycle notifications of a report run, carrying the report path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    CreationStarted(PathBuf),
    /// Sent once the run is over, whether it succeeded or not.
    CreationFinished(PathBuf),
}

impl ReportEvent {
    pub fn report_path(&self) -> &Path {
        match self {
            ReportEvent::CreationStarted(path) | ReportEvent::CreationFinished(path) => path,
        }
    }
}

pub type ReportEventSender = async_channel::Sender<ReportEvent>;
pub type ReportEventReceiver = async_channel::Receiver<ReportEvent>;
