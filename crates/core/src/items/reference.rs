use super::{Node, Referenceable};
use texreport_types::Label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceStyle {
    /// `\autoref{label}`
    #[default]
    Auto,
    /// `\autoref{label} on page~\pageref{label}`
    WithPage,
}

/// A cross-reference to a labelled node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    label: Label,
    pub style: ReferenceStyle,
}

impl Reference {
    pub fn to(target: &dyn Referenceable) -> Self {
        Self {
            label: target.label().clone(),
            style: ReferenceStyle::Auto,
        }
    }

    pub fn with_page(mut self) -> Self {
        self.style = ReferenceStyle::WithPage;
        self
    }

    pub fn label(&self) -> &Label {
        &self.label
    }
}

impl Node for Reference {}
