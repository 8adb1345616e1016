// crates/core/src/builder/mod.rs
//! Builders turn document nodes into TeX.
//!
//! A [`TexBuilder`] renders one node kind as a block. A [`TexChunkBuilder`]
//! additionally renders it as an inline fragment that container builders
//! embed into their own markup. Both are registered in a
//! [`BuilderRepository`], which picks the most specific builder along a
//! node's lineage.

mod figure;
mod layout;
mod list;
mod reference;
mod repository;
mod structure;
mod table;
mod text;
mod tracker;
mod values;

pub use repository::{BuilderRepository, ResolvedBuilder};
pub use tracker::BuildTracker;

use crate::error::BuildError;
use crate::items::{AsNodeRef, NodeRef};
use std::any::Any;

/// Page orientation a node is built for. Containers pass it down to their children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Renders a node kind as a block of markup.
pub trait TexBuilder: Send + Sync + 'static {
    type Item: Any;

    /// Appends markup to `cx` and tracks the sub-nodes this builder owns.
    fn build(&self, item: &Self::Item, cx: &mut BuildContext<'_>) -> Result<(), BuildError>;
}

/// Renders a node kind as an inline fragment.
pub trait TexChunkBuilder: Send + Sync + 'static {
    type Item: Any;

    /// Pure: no tracking, no side effects.
    fn chunk(
        &self,
        item: &Self::Item,
        repository: &BuilderRepository,
    ) -> Result<String, BuildError>;

    fn build(&self, item: &Self::Item, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        let tex = self.chunk(item, cx.repository)?;
        cx.append(&tex);
        Ok(())
    }
}

/// What a builder sees during one `build` call.
pub struct BuildContext<'a> {
    pub repository: &'a BuilderRepository,
    pub tracker: &'a mut BuildTracker,
    pub orientation: Orientation,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        repository: &'a BuilderRepository,
        tracker: &'a mut BuildTracker,
        orientation: Orientation,
    ) -> Self {
        Self {
            repository,
            tracker,
            orientation,
        }
    }

    pub fn append(&mut self, tex: &str) {
        self.tracker.append(tex);
    }

    pub fn chunk_for(&self, node: &dyn crate::items::Node) -> Result<String, BuildError> {
        self.repository.chunk_for(node)
    }

    /// Reports a nested node in the current orientation.
    pub fn report(&mut self, node: &NodeRef) -> Result<(), BuildError> {
        self.repository.report_oriented(node, self.tracker, self.orientation)
    }

    pub fn report_in(
        &mut self,
        node: &NodeRef,
        orientation: Orientation,
    ) -> Result<(), BuildError> {
        self.repository.report_oriented(node, self.tracker, orientation)
    }

    /// Builds a node embedded in a container with its chunk builder and tracks
    /// it as if reported. The markup is returned instead of appended.
    pub fn build_nested(&mut self, node: &NodeRef) -> Result<String, BuildError> {
        let builder = self.repository.chunk_builder_for(&**node)?;
        let start = self.tracker.tex().len();
        builder.build(&mut BuildContext::new(self.repository, self.tracker, self.orientation))?;
        self.tracker.track(node);
        Ok(self.tracker.split_tex_off(start))
    }

    pub fn track<N: AsNodeRef + ?Sized>(&mut self, node: &N) {
        self.tracker.track(node);
    }

    pub fn track_all<'n, N: AsNodeRef + 'n>(&mut self, nodes: impl IntoIterator<Item = &'n N>) {
        self.tracker.track_all(nodes);
    }
}

/// Markup and tracked nodes of one finished pass.
#[derive(Debug)]
pub struct BuildOutput {
    pub tex: String,
    pub tracked: Vec<NodeRef>,
}

/// Reports `nodes` in order into a fresh tracker. Stops at the first failure.
pub fn report_all<'a>(
    repository: &BuilderRepository,
    nodes: impl IntoIterator<Item = &'a NodeRef>,
) -> Result<BuildOutput, BuildError> {
    let mut tracker = BuildTracker::new();
    repository.report_all(nodes, &mut tracker)?;
    let tracked = tracker.tracked_objects().to_vec();
    Ok(BuildOutput {
        tex: tracker.into_tex(),
        tracked,
    })
}
