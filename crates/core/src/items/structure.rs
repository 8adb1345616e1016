use super::{Node, Referenceable, Text};
use crate::converter::{default_converter, DefaultConverter, NoConverter, TexConverter};
use std::sync::Arc;
use texreport_types::{Label, StructureLevel};

/// A sectioning heading: part, chapter, section, ... subparagraph.
#[derive(Debug, Clone)]
pub struct StructureElement {
    level: StructureLevel,
    name: String,
    text: Option<Arc<Text>>,
    label: Label,
    toc_title: String,
    in_toc: bool,
    converter: Arc<dyn TexConverter>,
}

fn with_line_break(mut name: String) -> String {
    if !name.ends_with('\n') {
        name.push('\n');
    }
    name
}

impl StructureElement {
    pub fn new(level: StructureLevel, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            level,
            name: if level.is_run_in() { with_line_break(name) } else { name },
            text: None,
            label: Label::mint(),
            toc_title: String::new(),
            in_toc: !level.is_run_in(),
            converter: default_converter(),
        }
    }

    /// A heading whose title is rich text, rendered through its chunk builder.
    /// The table of contents shows `toc_title`, escaped on construction.
    pub fn with_text(level: StructureLevel, toc_title: &str, mut text: Text) -> Self {
        if level.is_run_in() {
            text.content = with_line_break(std::mem::take(&mut text.content));
        }
        Self {
            level,
            name: String::new(),
            text: Some(Arc::new(text)),
            label: Label::mint(),
            toc_title: DefaultConverter.string_to_tex(toc_title),
            in_toc: !level.is_run_in(),
            converter: NoConverter::shared(),
        }
    }

    pub fn part(name: impl Into<String>) -> Self {
        Self::new(StructureLevel::Part, name)
    }

    pub fn chapter(name: impl Into<String>) -> Self {
        Self::new(StructureLevel::Chapter, name)
    }

    pub fn section(name: impl Into<String>) -> Self {
        Self::new(StructureLevel::Section, name)
    }

    pub fn subsection(name: impl Into<String>) -> Self {
        Self::new(StructureLevel::SubSection, name)
    }

    pub fn subsubsection(name: impl Into<String>) -> Self {
        Self::new(StructureLevel::SubSubSection, name)
    }

    pub fn paragraph(name: impl Into<String>) -> Self {
        Self::new(StructureLevel::Paragraph, name)
    }

    pub fn subparagraph(name: impl Into<String>) -> Self {
        Self::new(StructureLevel::SubParagraph, name)
    }

    /// Escaped by the heading's converter when rendered.
    pub fn with_toc_title(mut self, toc_title: impl Into<String>) -> Self {
        self.toc_title = toc_title.into();
        self
    }

    pub fn with_toc_entry(mut self, in_toc: bool) -> Self {
        self.in_toc = in_toc;
        self
    }

    pub fn with_converter(mut self, converter: Arc<dyn TexConverter>) -> Self {
        self.converter = converter;
        self
    }

    pub fn level(&self) -> StructureLevel {
        self.level
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> Option<&Arc<Text>> {
        self.text.as_ref()
    }

    pub fn toc_title(&self) -> &str {
        &self.toc_title
    }

    pub fn in_toc(&self) -> bool {
        self.in_toc
    }

    pub fn converter(&self) -> &dyn TexConverter {
        self.converter.as_ref()
    }
}

impl Referenceable for StructureElement {
    fn label(&self) -> &Label {
        &self.label
    }
}

impl Node for StructureElement {
    fn as_referenceable(&self) -> Option<&dyn Referenceable> {
        Some(self)
    }

    fn as_structure_element(&self) -> Option<&StructureElement> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_in_levels_skip_toc_and_break_line() {
        let paragraph = StructureElement::paragraph("Note");
        assert_eq!(paragraph.name(), "Note\n");
        assert!(!paragraph.in_toc());

        let already = StructureElement::subparagraph("Done\n");
        assert_eq!(already.name(), "Done\n");
    }

    #[test]
    fn test_regular_levels_enter_toc() {
        let chapter = StructureElement::chapter("Intro");
        assert_eq!(chapter.name(), "Intro");
        assert!(chapter.in_toc());
        assert_eq!(chapter.level(), StructureLevel::Chapter);
    }

    #[test]
    fn test_with_text_escapes_toc_title() {
        let heading =
            StructureElement::with_text(StructureLevel::Section, "50%", Text::new("Fifty"));
        assert_eq!(heading.toc_title(), "50\\%");
        assert!(heading.name().is_empty());
        assert_eq!(heading.text().map(|t| t.content.as_str()), Some("Fifty"));
    }

    #[test]
    fn test_labels_are_distinct() {
        let a = StructureElement::section("A");
        let b = StructureElement::section("A");
        assert_ne!(a.label(), b.label());
    }
}
