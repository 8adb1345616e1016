use super::{BuildContext, BuilderRepository, TexChunkBuilder};
use crate::error::{BuildError, RegistryError};
use crate::items::{Referenceable, StructureElement};
use crate::tex::helper;

pub(super) fn register(repository: &mut BuilderRepository) -> Result<(), RegistryError> {
    repository.register_chunk(StructureElementBuilder)?;
    Ok(())
}

/// Lines that must remain on the page, otherwise the heading moves to the next one.
const SPACE_NEEDED: u32 = 6;

pub struct StructureElementBuilder;

impl TexChunkBuilder for StructureElementBuilder {
    type Item = StructureElement;

    fn chunk(
        &self,
        element: &StructureElement,
        repository: &BuilderRepository,
    ) -> Result<String, BuildError> {
        let content = match element.text() {
            Some(text) => repository.chunk_for(&**text)?,
            None => element.name().to_string(),
        };
        let mut tex = helper::needspace(SPACE_NEEDED);
        tex.push_str(helper::line_feed());
        if element.toc_title().is_empty() || !element.in_toc() {
            tex.push_str(&helper::structure_element(
                element.level(),
                &content,
                element.converter(),
                element.in_toc(),
            ));
        } else {
            tex.push_str(&helper::structure_element_with_toc(
                element.level(),
                &content,
                element.converter(),
                element.toc_title(),
            ));
        }
        tex.push_str(&helper::label(element.label()));
        tex.push_str(helper::line_feed());
        Ok(tex)
    }

    fn build(
        &self,
        element: &StructureElement,
        cx: &mut BuildContext<'_>,
    ) -> Result<(), BuildError> {
        let tex = self.chunk(element, cx.repository)?;
        cx.append(&tex);
        if let Some(text) = element.text() {
            cx.track_all(text.items());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuildTracker;
    use crate::items::{node, FontStyle, InlineImage, NodeRef, Text};
    use texreport_types::StructureLevel;

    #[test]
    fn test_named_heading() {
        let repository = BuilderRepository::with_defaults().unwrap();
        let chapter = StructureElement::chapter("Results & Discussion");
        assert_eq!(
            repository.chunk_for(&chapter).unwrap(),
            format!(
                "\\Needspace{{6\\baselineskip}}\n\
                 \\chapter{{Results \\& Discussion}}\n\\label{{{}}}\n",
                chapter.label()
            )
        );
    }

    #[test]
    fn test_toc_title_and_run_in_headings() {
        let repository = BuilderRepository::with_defaults().unwrap();
        let section = StructureElement::section("A long title").with_toc_title("Short_1");
        assert!(repository
            .chunk_for(&section)
            .unwrap()
            .contains("\\section[Short\\_\\-1]{A long title}\n"));

        let paragraph = StructureElement::paragraph("Note").with_toc_title("ignored");
        assert!(repository
            .chunk_for(&paragraph)
            .unwrap()
            .contains("\\paragraph*{Note\\newline }\n"));
    }

    #[test]
    fn test_heading_from_text() {
        let repository = BuilderRepository::with_defaults().unwrap();
        let heading = StructureElement::with_text(
            StructureLevel::Section,
            "Dose [mg]",
            Text::new("Dose").with_font_style(FontStyle::Bold),
        );
        assert!(repository
            .chunk_for(&heading)
            .unwrap()
            .contains("\\section[Dose {[}mg{]}]{\\textbf{Dose}}\n"));
    }

    #[test]
    fn test_build_tracks_text_items_only() {
        let repository = BuilderRepository::with_defaults().unwrap();
        let mut tracker = BuildTracker::new();
        let icon: NodeRef = node(InlineImage::new("/img/icon.png"));
        let heading: NodeRef = node(StructureElement::with_text(
            StructureLevel::Chapter,
            "Icons",
            Text::new("Icon {0}").with_item(icon.clone()),
        ));
        repository.report(&heading, &mut tracker).unwrap();

        assert!(tracker.is_tracked(&icon));
        assert!(tracker.is_tracked(&heading));
        assert_eq!(tracker.tracked_objects().len(), 2);
        assert_eq!(tracker.last_structure_level(), StructureLevel::Chapter);
    }
}
