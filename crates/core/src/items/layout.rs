use super::{Node, NodeRef};
use crate::converter::{default_converter, TexConverter};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default)]
pub struct LineBreak;

impl Node for LineBreak {}

#[derive(Debug, Clone, Copy, Default)]
pub struct Par;

impl Node for Par {}

/// A framed box with a title around one node.
#[derive(Debug, Clone)]
pub struct TextBox {
    pub title: String,
    pub content: NodeRef,
    converter: Arc<dyn TexConverter>,
}

impl TextBox {
    pub fn new(title: impl Into<String>, content: NodeRef) -> Self {
        Self {
            title: title.into(),
            content,
            converter: default_converter(),
        }
    }

    pub fn with_converter(mut self, converter: Arc<dyn TexConverter>) -> Self {
        self.converter = converter;
        self
    }

    pub fn converter(&self) -> &dyn TexConverter {
        self.converter.as_ref()
    }
}

impl Node for TextBox {}

/// Two nodes in adjacent minipages.
#[derive(Debug, Clone)]
pub struct SideBySide {
    pub left: NodeRef,
    pub right: NodeRef,
}

impl SideBySide {
    pub fn new(left: NodeRef, right: NodeRef) -> Self {
        Self { left, right }
    }
}

impl Node for SideBySide {}

/// Nodes typeset on landscape pages.
#[derive(Debug, Clone, Default)]
pub struct InLandscape {
    pub items: Vec<NodeRef>,
}

impl InLandscape {
    pub fn new(items: impl IntoIterator<Item = NodeRef>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }
}

impl Node for InLandscape {}
