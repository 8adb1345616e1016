// crates/core/src/builder/repository.rs
//! The registry mapping node kinds to builders.

use super::{BuildContext, BuildTracker, Orientation, TexBuilder, TexChunkBuilder};
use crate::error::{BuildError, RegistryError};
use crate::items::{lineage, Kind, Node, NodeRef, NodeView};
use log::{debug, trace};
use std::collections::HashMap;
use std::fmt;

/// Type-erased face of a registered builder.
trait ErasedBuilder: Send + Sync {
    fn build(&self, view: NodeView<'_>, cx: &mut BuildContext<'_>) -> Result<(), BuildError>;

    fn chunk(
        &self,
        view: NodeView<'_>,
        repository: &BuilderRepository,
    ) -> Result<String, BuildError>;

    fn is_chunk_capable(&self) -> bool;

    fn name(&self) -> &'static str;
}

fn downcast<'n, T: 'static>(view: NodeView<'n>) -> Result<&'n T, BuildError> {
    view.downcast::<T>().ok_or(BuildError::KindMismatch {
        expected: std::any::type_name::<T>(),
        found: view.kind().name(),
    })
}

struct Full<B>(B);

impl<B: TexBuilder> ErasedBuilder for Full<B> {
    fn build(&self, view: NodeView<'_>, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        self.0.build(downcast::<B::Item>(view)?, cx)
    }

    fn chunk(
        &self,
        view: NodeView<'_>,
        _repository: &BuilderRepository,
    ) -> Result<String, BuildError> {
        Err(BuildError::ChunkBuilderNotFound(view.kind().name()))
    }

    fn is_chunk_capable(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        std::any::type_name::<B>()
    }
}

struct Chunk<B>(B);

impl<B: TexChunkBuilder> ErasedBuilder for Chunk<B> {
    fn build(&self, view: NodeView<'_>, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        TexChunkBuilder::build(&self.0, downcast::<B::Item>(view)?, cx)
    }

    fn chunk(
        &self,
        view: NodeView<'_>,
        repository: &BuilderRepository,
    ) -> Result<String, BuildError> {
        self.0.chunk(downcast::<B::Item>(view)?, repository)
    }

    fn is_chunk_capable(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        std::any::type_name::<B>()
    }
}

struct Registration {
    kind: Kind,
    builder: Box<dyn ErasedBuilder>,
}

/// A builder selected for one node, bound to the lineage view it matched.
pub struct ResolvedBuilder<'r, 'n> {
    registration: &'r Registration,
    view: NodeView<'n>,
}

impl ResolvedBuilder<'_, '_> {
    /// The kind the builder was registered for.
    pub fn kind(&self) -> Kind {
        self.registration.kind
    }

    pub fn builder_name(&self) -> &'static str {
        self.registration.builder.name()
    }

    pub fn is_chunk_capable(&self) -> bool {
        self.registration.builder.is_chunk_capable()
    }

    pub fn build(&self, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        self.registration.builder.build(self.view, cx)
    }

    pub fn chunk(&self, repository: &BuilderRepository) -> Result<String, BuildError> {
        self.registration.builder.chunk(self.view, repository)
    }
}

impl fmt::Debug for ResolvedBuilder<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedBuilder")
            .field("kind", &self.kind().name())
            .field("builder", &self.builder_name())
            .finish()
    }
}

/// Maps node kinds to builders.
///
/// At most one builder is registered per kind. For a node, the registry walks
/// its lineage (own kind first, then ancestor groups nearest first) and uses
/// the first depth that has a builder. More than one builder at that depth
/// is rejected as ambiguous. Registration happens up front; afterwards
/// the registry is only read and can be shared across concurrent passes.
#[derive(Default)]
pub struct BuilderRepository {
    builders: HashMap<Kind, Registration>,
}

impl BuilderRepository {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the builders for every node kind in [`crate::items`].
    pub fn with_defaults() -> Result<Self, RegistryError> {
        let mut repository = Self::new();
        super::text::register(&mut repository)?;
        super::structure::register(&mut repository)?;
        super::list::register(&mut repository)?;
        super::table::register(&mut repository)?;
        super::figure::register(&mut repository)?;
        super::reference::register(&mut repository)?;
        super::values::register(&mut repository)?;
        super::layout::register(&mut repository)?;
        debug!("Registered {} default TeX builders", repository.len());
        Ok(repository)
    }

    pub fn register<B: TexBuilder>(&mut self, builder: B) -> Result<&mut Self, RegistryError> {
        self.insert(Kind::of::<B::Item>(), Box::new(Full(builder)))
    }

    pub fn register_chunk<B: TexChunkBuilder>(
        &mut self,
        builder: B,
    ) -> Result<&mut Self, RegistryError> {
        self.insert(Kind::of::<B::Item>(), Box::new(Chunk(builder)))
    }

    fn insert(
        &mut self,
        kind: Kind,
        builder: Box<dyn ErasedBuilder>,
    ) -> Result<&mut Self, RegistryError> {
        if self.builders.contains_key(&kind) {
            return Err(RegistryError::DuplicateBuilder(kind.name()));
        }
        trace!("Registering {} for {}", builder.name(), kind);
        self.builders.insert(kind, Registration { kind, builder });
        Ok(self)
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.builders.contains_key(&Kind::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = Kind> + '_ {
        self.builders.keys().copied()
    }

    fn resolve<'r, 'n>(
        &'r self,
        node: &'n dyn Node,
        chunk_only: bool,
    ) -> Result<Option<ResolvedBuilder<'r, 'n>>, BuildError> {
        for group in lineage(node) {
            let mut matches = group.into_iter().filter_map(|view| {
                self.builders
                    .get(&view.kind())
                    .filter(|registration| !chunk_only || registration.builder.is_chunk_capable())
                    .map(|registration| ResolvedBuilder { registration, view })
            });
            let Some(first) = matches.next() else {
                continue;
            };
            let rest: Vec<_> = matches.collect();
            if rest.is_empty() {
                return Ok(Some(first));
            }
            let kinds = std::iter::once(&first)
                .chain(&rest)
                .map(|resolved| resolved.kind().name())
                .collect();
            return Err(BuildError::AmbiguousBuilder {
                node: node.type_name(),
                kinds,
            });
        }
        Ok(None)
    }

    /// The most specific builder for `node`.
    pub fn builder_for<'r, 'n>(
        &'r self,
        node: &'n dyn Node,
    ) -> Result<ResolvedBuilder<'r, 'n>, BuildError> {
        self.resolve(node, false)?
            .ok_or(BuildError::BuilderNotFound(node.type_name()))
    }

    /// The most specific chunk-capable builder for `node`.
    pub fn chunk_builder_for<'r, 'n>(
        &'r self,
        node: &'n dyn Node,
    ) -> Result<ResolvedBuilder<'r, 'n>, BuildError> {
        self.resolve(node, true)?
            .ok_or(BuildError::ChunkBuilderNotFound(node.type_name()))
    }

    /// Inline markup for `node`. Tracks nothing.
    pub fn chunk_for(&self, node: &dyn Node) -> Result<String, BuildError> {
        self.chunk_builder_for(node)?.chunk(self)
    }

    /// Builds `node` into `tracker` and tracks it. Reporting `None` does nothing.
    pub fn report<'a>(
        &self,
        node: impl Into<Option<&'a NodeRef>>,
        tracker: &mut BuildTracker,
    ) -> Result<(), BuildError> {
        match node.into() {
            Some(node) => self.report_oriented(node, tracker, Orientation::default()),
            None => Ok(()),
        }
    }

    pub fn report_oriented(
        &self,
        node: &NodeRef,
        tracker: &mut BuildTracker,
        orientation: Orientation,
    ) -> Result<(), BuildError> {
        let builder = self.builder_for(&**node)?;
        trace!("Building {} with {}", node.type_name(), builder.builder_name());
        builder.build(&mut BuildContext::new(self, tracker, orientation))?;
        tracker.track(node);
        Ok(())
    }

    /// Reports `nodes` in order, stopping at the first failure.
    pub fn report_all<'a>(
        &self,
        nodes: impl IntoIterator<Item = &'a NodeRef>,
        tracker: &mut BuildTracker,
    ) -> Result<(), BuildError> {
        for node in nodes {
            self.report(node, tracker)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BuilderRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderRepository")
            .field("kinds", &self.builders.keys().map(Kind::name).collect::<Vec<_>>())
            .finish()
    }
}
