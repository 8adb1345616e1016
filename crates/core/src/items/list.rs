use super::{Node, Text};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStyle {
    #[default]
    Itemized,
    Enumerated,
}

#[derive(Debug, Clone)]
pub struct List {
    pub style: ListStyle,
    items: Vec<Arc<Text>>,
}

impl List {
    pub fn new(items: impl IntoIterator<Item = Text>, style: ListStyle) -> Self {
        Self {
            style,
            items: items.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn itemized(items: impl IntoIterator<Item = Text>) -> Self {
        Self::new(items, ListStyle::Itemized)
    }

    pub fn enumerated(items: impl IntoIterator<Item = Text>) -> Self {
        Self::new(items, ListStyle::Enumerated)
    }

    /// Builds a list from already shared texts, keeping their identity.
    pub fn from_shared(items: Vec<Arc<Text>>, style: ListStyle) -> Self {
        Self { style, items }
    }

    pub fn items(&self) -> &[Arc<Text>] {
        &self.items
    }
}

impl Node for List {}
