use crate::error::BuildError;
use crate::items::{AsNodeRef, Attachment, NodeRef, Reference, Referenceable, StructureElement};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use texreport_types::StructureLevel;

/// Accumulates the markup of one report pass and remembers every node it touched.
///
/// Tracking is by identity: the same shared node reached twice is recorded
/// once, while two equal but distinct nodes are both recorded. A tracker
/// belongs to a single pass and is not shared between threads.
#[derive(Debug, Default)]
pub struct BuildTracker {
    working_directory: Option<PathBuf>,
    report_full_path: Option<PathBuf>,
    tex: String,
    identities: HashSet<usize>,
    tracked: Vec<NodeRef>,
    references: HashMap<usize, (NodeRef, Arc<Reference>)>,
}

impl BuildTracker {
    /// An in-memory tracker without working directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_report(
        working_directory: impl Into<PathBuf>,
        report_full_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            working_directory: Some(working_directory.into()),
            report_full_path: Some(report_full_path.into()),
            ..Self::default()
        }
    }

    pub fn working_directory(&self) -> Option<&Path> {
        self.working_directory.as_deref()
    }

    pub fn report_full_path(&self) -> Option<&Path> {
        self.report_full_path.as_deref()
    }

    /// The report file name without extension.
    pub fn report_file_name(&self) -> Option<&str> {
        self.report_full_path.as_deref()?.file_stem()?.to_str()
    }

    pub fn report_folder(&self) -> Option<&Path> {
        self.report_full_path.as_deref()?.parent()
    }

    /// Appends finished markup. Nothing is escaped here.
    pub fn append(&mut self, tex: &str) {
        self.tex.push_str(tex);
    }

    pub fn tex(&self) -> &str {
        &self.tex
    }

    /// Removes and returns the markup after byte offset `at`.
    pub(crate) fn split_tex_off(&mut self, at: usize) -> String {
        self.tex.split_off(at)
    }

    pub fn into_tex(self) -> String {
        self.tex
    }

    /// Records `node` once. Plain values are skipped.
    pub fn track<N: AsNodeRef + ?Sized>(&mut self, node: &N) {
        let id = node.node_id();
        if self.identities.contains(&id) {
            return;
        }
        let node = node.to_node_ref();
        if !node.tracks_identity() {
            return;
        }
        self.identities.insert(id);
        self.tracked.push(node);
    }

    pub fn track_all<'n, N: AsNodeRef + 'n>(&mut self, nodes: impl IntoIterator<Item = &'n N>) {
        for node in nodes {
            self.track(node);
        }
    }

    pub fn is_tracked<N: AsNodeRef + ?Sized>(&self, node: &N) -> bool {
        self.identities.contains(&node.node_id())
    }

    /// Tracked nodes in first-tracked order.
    pub fn tracked_objects(&self) -> &[NodeRef] {
        &self.tracked
    }

    pub fn attachments(&self) -> impl Iterator<Item = &Attachment> {
        self.tracked.iter().filter_map(|node| node.as_attachment())
    }

    /// Caches a reference to `target` for `node`. The first call for a node wins.
    pub fn add_reference<N: AsNodeRef + ?Sized>(&mut self, node: &N, target: &dyn Referenceable) {
        self.references
            .entry(node.node_id())
            .or_insert_with(|| (node.to_node_ref(), Arc::new(Reference::to(target))));
    }

    pub fn reference_for<N: AsNodeRef + ?Sized>(&self, node: &N) -> Option<Arc<Reference>> {
        self.references.get(&node.node_id()).map(|(_, reference)| Arc::clone(reference))
    }

    /// Level of the most recently tracked heading, or part if there is none.
    pub fn last_structure_level(&self) -> StructureLevel {
        self.tracked
            .iter()
            .rev()
            .find_map(|node| node.as_structure_element())
            .map_or(StructureLevel::Part, StructureElement::level)
    }

    /// A new heading `offset` levels below (or above, when negative) the last tracked one.
    pub fn structure_element_relative_to_last(
        &self,
        name: &str,
        offset: i32,
    ) -> Result<StructureElement, BuildError> {
        let level = self.last_structure_level();
        let target = level
            .offset(offset)
            .ok_or(BuildError::StructureLevelOutOfRange { level, offset })?;
        Ok(StructureElement::new(target, name))
    }

    /// Removes the working directory. A failure is retried once and then ignored.
    pub fn delete_working_directory(&self) {
        let Some(dir) = self.working_directory.as_deref() else {
            return;
        };
        if !dir.exists() {
            return;
        }
        if let Err(e) = fs::remove_dir_all(dir) {
            debug!("Deleting working directory {} failed, retrying: {}", dir.display(), e);
            std::thread::yield_now();
            if let Err(e) = fs::remove_dir_all(dir) {
                warn!("Working directory {} could not be deleted: {}", dir.display(), e);
            }
        }
    }
}
