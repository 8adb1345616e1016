//! The document model.
//!
//! Nodes are plain values shared behind [`NodeRef`] handles. A node's
//! *lineage* is its own type followed by the ancestor views it declares,
//! grouped by depth, nearest first. Builder dispatch walks the lineage and
//! picks the first depth that has a registered builder; two builders at that
//! depth are an ambiguity.
//!
//! Capabilities that are not dispatch keys (cross-referencing, attachments,
//! captions, headings) are exposed through accessor methods on [`Node`].

mod figure;
mod layout;
mod list;
mod reference;
mod structure;
mod table;
mod text;
mod values;

pub use figure::{Attachment, Figure, InlineImage, FIGURES_FOLDER, PLOTS_FOLDER};
pub use layout::{InLandscape, LineBreak, Par, SideBySide, TextBox};
pub use list::{List, ListStyle};
pub use reference::{Reference, ReferenceStyle};
pub use structure::StructureElement;
pub use table::{Cell, Column, ColumnAlignment, ColumnType, DataTable, SimpleTable, Table};
pub use text::{Alignment, ColorText, FontStyle, Text};

pub use crate::tex::figure_writer::FigurePosition;

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use texreport_types::Label;

/// A shared handle to any document node.
pub type NodeRef = Arc<dyn Node>;

/// Wraps a value into a [`NodeRef`].
pub fn node<N: Node>(value: N) -> NodeRef {
    Arc::new(value)
}

pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A runtime type used as a dispatch key.
#[derive(Clone, Copy, Debug)]
pub struct Kind {
    id: TypeId,
    name: &'static str,
}

impl Kind {
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Kind {}

impl Hash for Kind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A node seen as one of the kinds in its lineage.
#[derive(Clone, Copy)]
pub struct NodeView<'a> {
    kind: Kind,
    value: &'a dyn Any,
}

impl<'a> NodeView<'a> {
    pub fn of<T: Any>(value: &'a T) -> Self {
        Self {
            kind: Kind::of::<T>(),
            value,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn downcast<T: Any>(&self) -> Option<&'a T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for NodeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeView").field("kind", &self.kind.name).finish()
    }
}

/// A value that can be reported into a document.
pub trait Node: AsAny + fmt::Debug + Send + Sync {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Views of this node as the more general kinds it specialises.
    ///
    /// One group per depth, nearest first. Views in the same group are
    /// unrelated capabilities of equal specificity.
    fn ancestors(&self) -> Vec<Vec<NodeView<'_>>> {
        Vec::new()
    }

    fn as_referenceable(&self) -> Option<&dyn Referenceable> {
        None
    }

    fn as_attachment(&self) -> Option<&Attachment> {
        None
    }

    fn as_structure_element(&self) -> Option<&StructureElement> {
        None
    }

    fn caption(&self) -> Option<&Arc<Text>> {
        None
    }

    /// Plain values (strings) return `false` and are never recorded by the tracker.
    fn tracks_identity(&self) -> bool {
        true
    }
}

/// The node's own kind followed by its ancestor groups.
pub fn lineage(node: &dyn Node) -> Vec<Vec<NodeView<'_>>> {
    let value = node.as_any();
    let own = NodeView {
        kind: Kind {
            id: value.type_id(),
            name: node.type_name(),
        },
        value,
    };
    let mut groups = vec![vec![own]];
    groups.extend(node.ancestors().into_iter().filter(|group| !group.is_empty()));
    groups
}

/// Carries a label other nodes can point at.
pub trait Referenceable: Send + Sync {
    fn label(&self) -> &Label;
}

/// Anything that can be tracked by identity: a [`NodeRef`] or an `Arc` of a concrete node.
pub trait AsNodeRef {
    fn to_node_ref(&self) -> NodeRef;

    /// Address of the shared allocation; stable while any handle is alive.
    fn node_id(&self) -> usize;
}

impl<T: Node> AsNodeRef for Arc<T> {
    fn to_node_ref(&self) -> NodeRef {
        self.clone()
    }

    fn node_id(&self) -> usize {
        Arc::as_ptr(self) as *const () as usize
    }
}

impl AsNodeRef for Arc<dyn Node> {
    fn to_node_ref(&self) -> NodeRef {
        Arc::clone(self)
    }

    fn node_id(&self) -> usize {
        Arc::as_ptr(self) as *const () as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Base;
    impl Node for Base {}

    #[derive(Debug)]
    struct Derived {
        base: Base,
    }
    impl Node for Derived {
        fn ancestors(&self) -> Vec<Vec<NodeView<'_>>> {
            vec![vec![NodeView::of(&self.base)], Vec::new()]
        }
    }

    #[test]
    fn test_lineage_starts_with_runtime_kind() {
        let derived: NodeRef = node(Derived { base: Base });
        let kinds: Vec<Vec<Kind>> = lineage(&*derived)
            .iter()
            .map(|group| group.iter().map(NodeView::kind).collect())
            .collect();
        assert_eq!(kinds, vec![vec![Kind::of::<Derived>()], vec![Kind::of::<Base>()]]);
    }

    #[test]
    fn test_view_downcasts_to_its_kind_only() {
        let derived = Derived { base: Base };
        let groups = lineage(&derived);
        assert!(groups[0][0].downcast::<Derived>().is_some());
        assert!(groups[0][0].downcast::<Base>().is_none());
        assert!(groups[1][0].downcast::<Base>().is_some());
    }

    #[test]
    fn test_type_name_is_concrete() {
        let n: NodeRef = node(Base);
        assert!(n.type_name().ends_with("Base"));
    }

    #[test]
    fn test_node_ids_follow_identity() {
        let a: NodeRef = node(Base);
        let b: NodeRef = node(Base);
        let a2 = Arc::clone(&a);
        assert_eq!(a.node_id(), a2.node_id());
        assert_ne!(a.node_id(), b.node_id());

        let concrete = Arc::new(Base);
        let erased: NodeRef = concrete.clone();
        assert_eq!(concrete.node_id(), erased.node_id());
    }
}
