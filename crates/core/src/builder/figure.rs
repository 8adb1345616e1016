use super::{BuildContext, BuilderRepository, TexBuilder, TexChunkBuilder};
use crate::converter::DefaultConverter;
use crate::error::{BuildError, RegistryError};
use crate::items::{Figure, InlineImage, Node, Referenceable};
use crate::tex::figure_writer;

pub(super) fn register(repository: &mut BuilderRepository) -> Result<(), RegistryError> {
    repository.register(FigureBuilder)?.register_chunk(InlineImageBuilder)?;
    Ok(())
}

/// Floating figures only exist as blocks.
pub struct FigureBuilder;

impl TexBuilder for FigureBuilder {
    type Item = Figure;

    fn build(&self, figure: &Figure, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        let mut caption_tex = String::new();
        if let Some(caption) = figure.caption() {
            caption_tex = cx.chunk_for(&**caption)?;
            cx.track_all(caption.items());
            cx.track(caption);
        }
        let tex = figure_writer::include_figure(
            figure.position,
            &caption_tex,
            figure.label(),
            &figure.attachment().relative_file_path(),
            cx.orientation,
            &DefaultConverter,
        );
        cx.append(&tex);
        Ok(())
    }
}

pub struct InlineImageBuilder;

impl TexChunkBuilder for InlineImageBuilder {
    type Item = InlineImage;

    fn chunk(
        &self,
        image: &InlineImage,
        _repository: &BuilderRepository,
    ) -> Result<String, BuildError> {
        Ok(figure_writer::inline_graphic(
            &image.attachment().relative_file_path(),
            &DefaultConverter,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{BuildTracker, Orientation};
    use crate::items::{node, FigurePosition, InLandscape, NodeRef};

    #[test]
    fn test_figure_markup() {
        let repository = BuilderRepository::with_defaults().unwrap();
        let mut tracker = BuildTracker::new();
        let figure =
            Figure::new("Plasma 50%", "/data/plasma curve.png").with_position(FigurePosition::Top);
        let label = figure.label().clone();
        let figure: NodeRef = node(figure);
        repository.report(&figure, &mut tracker).unwrap();

        assert_eq!(
            tracker.tex(),
            format!(
                "\\begin{{figure}}[t]\n\\noindent\n\\centering\n\
                 \\includegraphics[max height=0.9\\textheight, \
                 max width=\\textwidth, keepaspectratio]\
                 {{./figures/plasma\\space curve.png}}\n\
                 \\caption{{Plasma 50\\%}}\n\\label{{{}}}\\end{{figure}}\n",
                label
            )
        );
        assert_eq!(tracker.tracked_objects().len(), 2);
        assert_eq!(tracker.attachments().count(), 1);
    }

    #[test]
    fn test_figure_has_no_chunk() {
        let repository = BuilderRepository::with_defaults().unwrap();
        let figure = Figure::new("Chart", "/data/chart.png");
        assert!(matches!(
            repository.chunk_for(&figure),
            Err(BuildError::ChunkBuilderNotFound(_))
        ));
    }

    #[test]
    fn test_landscape_swaps_page_dimensions() {
        let repository = BuilderRepository::with_defaults().unwrap();
        let mut tracker = BuildTracker::new();
        let figure: NodeRef = node(Figure::new("Chart", "/data/chart.png"));
        repository
            .report_oriented(&figure, &mut tracker, Orientation::Landscape)
            .unwrap();
        assert!(tracker.tex().contains("max height=0.9\\textwidth, max width=\\textheight"));

        let mut portrait = BuildTracker::new();
        repository.report(&figure, &mut portrait).unwrap();
        assert!(portrait.tex().contains("max height=0.9\\textheight, max width=\\textwidth"));

        let mut wrapped = BuildTracker::new();
        repository
            .report(&node(InLandscape::new([figure.clone()])), &mut wrapped)
            .unwrap();
        assert!(wrapped.tex().contains("max height=0.9\\textwidth"));
    }

    #[test]
    fn test_inline_image_is_tracked_by_report() {
        let repository = BuilderRepository::with_defaults().unwrap();
        let mut tracker = BuildTracker::new();
        let image: NodeRef = node(InlineImage::new("/img/logo.png"));
        repository.report(&image, &mut tracker).unwrap();
        assert_eq!(
            tracker.tex(),
            "\\includegraphics[height=1\\baselineskip]{./figures/logo.png}\n"
        );
        assert!(tracker.is_tracked(&image));
        assert_eq!(tracker.attachments().next().map(|a| a.file_name()), Some("logo.png"));
    }
}
