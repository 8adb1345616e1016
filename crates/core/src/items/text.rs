use super::{Node, NodeRef, NodeView};
use crate::converter::{default_converter, TexConverter};
use std::sync::Arc;
use texreport_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Justified,
    FlushLeft,
    FlushRight,
    Centered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    Slanted,
}

/// A run of text. `{0}`, `{1}`, ... in the content are replaced by the
/// inline markup of the corresponding entry in `items`.
#[derive(Debug, Clone)]
pub struct Text {
    pub content: String,
    pub alignment: Alignment,
    pub font_style: FontStyle,
    items: Vec<NodeRef>,
    converter: Arc<dyn TexConverter>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            alignment: Alignment::default(),
            font_style: FontStyle::default(),
            items: Vec::new(),
            converter: default_converter(),
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = NodeRef>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn with_item(mut self, item: NodeRef) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_font_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }

    pub fn with_converter(mut self, converter: Arc<dyn TexConverter>) -> Self {
        self.converter = converter;
        self
    }

    pub fn items(&self) -> &[NodeRef] {
        &self.items
    }

    pub fn converter(&self) -> &dyn TexConverter {
        self.converter.as_ref()
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Text::new(content)
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Text::new(content)
    }
}

impl Node for Text {}

/// Text rendered in a given color. Without a color it renders like plain [`Text`].
#[derive(Debug, Clone)]
pub struct ColorText {
    pub text: Text,
    pub color: Option<Color>,
}

impl ColorText {
    pub fn new(content: impl Into<String>, color: Color) -> Self {
        Self {
            text: Text::new(content),
            color: Some(color),
        }
    }

    pub fn uncolored(content: impl Into<String>) -> Self {
        Self {
            text: Text::new(content),
            color: None,
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = NodeRef>) -> Self {
        self.text = self.text.with_items(items);
        self
    }
}

impl Node for ColorText {
    fn ancestors(&self) -> Vec<Vec<NodeView<'_>>> {
        vec![vec![NodeView::of(&self.text)]]
    }
}
