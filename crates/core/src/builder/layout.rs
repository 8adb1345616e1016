use super::{BuildContext, BuilderRepository, Orientation, TexBuilder, TexChunkBuilder};
use crate::error::{BuildError, RegistryError};
use crate::items::{InLandscape, LineBreak, Par, SideBySide, TextBox};
use crate::tex::helper::{self, Environment};

pub(super) fn register(repository: &mut BuilderRepository) -> Result<(), RegistryError> {
    repository
        .register_chunk(LineBreakBuilder)?
        .register_chunk(ParBuilder)?
        .register_chunk(SideBySideBuilder)?
        .register(TextBoxBuilder)?
        .register(InLandscapeBuilder)?;
    Ok(())
}

pub struct LineBreakBuilder;

impl TexChunkBuilder for LineBreakBuilder {
    type Item = LineBreak;

    fn chunk(
        &self,
        _item: &LineBreak,
        _repository: &BuilderRepository,
    ) -> Result<String, BuildError> {
        Ok(helper::line_break().to_string())
    }
}

pub struct ParBuilder;

impl TexChunkBuilder for ParBuilder {
    type Item = Par;

    fn chunk(&self, _item: &Par, _repository: &BuilderRepository) -> Result<String, BuildError> {
        Ok(helper::par().to_string())
    }
}

pub struct SideBySideBuilder;

impl TexChunkBuilder for SideBySideBuilder {
    type Item = SideBySide;

    fn chunk(
        &self,
        pair: &SideBySide,
        repository: &BuilderRepository,
    ) -> Result<String, BuildError> {
        let left = repository.chunk_for(&*pair.left)?;
        let right = repository.chunk_for(&*pair.right)?;
        Ok(helper::side_by_side(&left, &right))
    }

    fn build(&self, pair: &SideBySide, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        let left = cx.build_nested(&pair.left)?;
        let right = cx.build_nested(&pair.right)?;
        cx.append(&helper::side_by_side(&left, &right));
        Ok(())
    }
}

pub struct TextBoxBuilder;

impl TexBuilder for TextBoxBuilder {
    type Item = TextBox;

    fn build(&self, text_box: &TextBox, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        let content = cx.build_nested(&text_box.content)?;
        let title = text_box.converter().string_to_tex(&text_box.title);
        cx.append(&helper::text_box(&title, &content));
        Ok(())
    }
}

/// Wraps its children in a landscape environment and builds them for landscape pages.
pub struct InLandscapeBuilder;

impl TexBuilder for InLandscapeBuilder {
    type Item = InLandscape;

    fn build(&self, landscape: &InLandscape, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        cx.append(&helper::begin(Environment::Landscape));
        for item in &landscape.items {
            cx.report_in(item, Orientation::Landscape)?;
        }
        cx.append(&helper::end(Environment::Landscape));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuildTracker;
    use crate::items::{node, InlineImage, List, NodeRef, Text};

    #[test]
    fn test_markers() {
        let repository = BuilderRepository::with_defaults().unwrap();
        assert_eq!(repository.chunk_for(&LineBreak).unwrap(), "\\\\\n");
        assert_eq!(repository.chunk_for(&Par).unwrap(), "\\par\n");
    }

    #[test]
    fn test_side_by_side() {
        let repository = BuilderRepository::with_defaults().unwrap();
        let pair = SideBySide::new(
            node(Text::new("left")),
            node(List::itemized([Text::new("right")])),
        );
        assert_eq!(
            repository.chunk_for(&pair).unwrap(),
            "\\begin{minipage}[t]{0.45\\linewidth}\nleft\\end{minipage}\n\\hfill%\n\
             \\begin{minipage}[t]{0.45\\linewidth}\n\
             \\begin{itemize}\n\\item right\n\\end{itemize}\n\\end{minipage}\n"
        );
    }

    #[test]
    fn test_text_box_tracks_content() {
        let repository = BuilderRepository::with_defaults().unwrap();
        let mut tracker = BuildTracker::new();
        let icon: NodeRef = node(InlineImage::new("/img/icon.png"));
        let content: NodeRef = node(Text::new("inside {0}").with_item(icon.clone()));
        let text_box: NodeRef = node(TextBox::new("Note #1", content.clone()));
        repository.report(&text_box, &mut tracker).unwrap();

        assert_eq!(
            tracker.tex(),
            "\\textbox{Note \\#1}{inside \
             \\includegraphics[height=1\\baselineskip]{./figures/icon.png}\n}\n"
        );
        let tracked = tracker.tracked_objects();
        assert_eq!(tracked.len(), 3);
        assert!(std::sync::Arc::ptr_eq(&tracked[0], &icon));
        assert!(std::sync::Arc::ptr_eq(&tracked[1], &content));
        assert!(std::sync::Arc::ptr_eq(&tracked[2], &text_box));
        assert_eq!(tracker.attachments().count(), 1);
        assert!(repository.chunk_for(&*text_box).is_err());
    }

    #[test]
    fn test_side_by_side_tracks_both_panels() {
        let repository = BuilderRepository::with_defaults().unwrap();
        let mut tracker = BuildTracker::new();
        let icon: NodeRef = node(InlineImage::new("/img/icon.png"));
        let left: NodeRef = node(Text::new("{0}").with_item(icon.clone()));
        let right: NodeRef = node(List::itemized([Text::new("right")]));
        let pair = SideBySide::new(left.clone(), right.clone());
        let expected = repository.chunk_for(&pair).unwrap();
        let pair: NodeRef = node(pair);

        repository.report(&pair, &mut tracker).unwrap();

        assert_eq!(tracker.tex(), expected);
        assert!(tracker.is_tracked(&icon));
        assert!(tracker.is_tracked(&left));
        assert!(tracker.is_tracked(&right));
        assert!(tracker.is_tracked(&pair));
        // the list item text counts too
        assert_eq!(tracker.tracked_objects().len(), 5);
        let attachments: Vec<&str> = tracker.attachments().map(|a| a.file_name()).collect();
        assert_eq!(attachments, vec!["icon.png"]);
    }

    #[test]
    fn test_nested_block_only_node_is_rejected() {
        let repository = BuilderRepository::with_defaults().unwrap();
        let mut tracker = BuildTracker::new();
        let inner: NodeRef = node(TextBox::new("inner", node(Text::new("x"))));
        let outer: NodeRef = node(TextBox::new("outer", inner));
        assert!(matches!(
            repository.report(&outer, &mut tracker),
            Err(BuildError::ChunkBuilderNotFound(_))
        ));
    }

    #[test]
    fn test_landscape_reports_children_in_order() {
        let repository = BuilderRepository::with_defaults().unwrap();
        let mut tracker = BuildTracker::new();
        let first: NodeRef = node(Text::new("one"));
        let second: NodeRef = node(Par);
        let landscape: NodeRef = node(InLandscape::new([first.clone(), second.clone()]));
        repository.report(&landscape, &mut tracker).unwrap();

        assert_eq!(tracker.tex(), "\\begin{landscape}one\\par\n\\end{landscape}\n");
        assert!(tracker.is_tracked(&first));
        assert!(tracker.is_tracked(&second));
        assert_eq!(tracker.tracked_objects().len(), 3);
    }
}
