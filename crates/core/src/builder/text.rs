use super::{BuildContext, BuilderRepository, TexChunkBuilder};
use crate::error::{BuildError, RegistryError};
use crate::items::{Alignment, ColorText, FontStyle, Text};
use crate::tex::helper::{self, Environment};

pub(super) fn register(repository: &mut BuilderRepository) -> Result<(), RegistryError> {
    repository.register_chunk(TextBuilder)?.register_chunk(ColorTextBuilder)?;
    Ok(())
}

/// `{i}` placeholders become `@i@` so they survive escaping.
fn protect_placeholders(content: &str, count: usize) -> String {
    (0..count).fold(content.to_string(), |text, i| {
        text.replace(&format!("{{{}}}", i), &format!("@{}@", i))
    })
}

/// Replaces every `@i@` with `chunks[i]` in one left-to-right pass.
fn substitute(escaped: &str, chunks: &[String]) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut rest = escaped;
    while let Some(start) = rest.find('@') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && after[digits..].starts_with('@') {
            if let Some(chunk) = after[..digits].parse::<usize>().ok().and_then(|i| chunks.get(i)) {
                out.push_str(chunk);
                rest = &after[digits + 1..];
                continue;
            }
        }
        out.push('@');
        rest = after;
    }
    out.push_str(rest);
    out
}

fn styled(font_style: FontStyle, tex: String) -> String {
    match font_style {
        FontStyle::Normal => tex,
        FontStyle::Bold => helper::bold(&tex),
        FontStyle::Italic => helper::italic(&tex),
        FontStyle::Slanted => helper::slanted(&tex),
    }
}

fn aligned(alignment: Alignment, tex: String) -> String {
    let environment = match alignment {
        Alignment::Justified => return tex,
        Alignment::Centered => Environment::Center,
        Alignment::FlushLeft => Environment::FlushLeft,
        Alignment::FlushRight => Environment::FlushRight,
    };
    format!("{}{}{}", helper::begin(environment), tex, helper::end(environment))
}

pub(super) fn text_chunk(
    text: &Text,
    repository: &BuilderRepository,
) -> Result<String, BuildError> {
    if text.content.is_empty() {
        return Ok(String::new());
    }
    let converter = text.converter();
    let tex = if text.items().is_empty() {
        converter.string_to_tex(&text.content)
    } else {
        let chunks = text
            .items()
            .iter()
            .map(|item| repository.chunk_for(&**item))
            .collect::<Result<Vec<_>, _>>()?;
        let escaped = converter.string_to_tex(&protect_placeholders(&text.content, chunks.len()));
        substitute(&escaped, &chunks)
    };
    Ok(aligned(text.alignment, styled(text.font_style, tex)))
}

pub struct TextBuilder;

impl TexChunkBuilder for TextBuilder {
    type Item = Text;

    fn chunk(&self, text: &Text, repository: &BuilderRepository) -> Result<String, BuildError> {
        text_chunk(text, repository)
    }

    fn build(&self, text: &Text, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        let tex = self.chunk(text, cx.repository)?;
        cx.append(&tex);
        cx.track_all(text.items());
        Ok(())
    }
}

pub struct ColorTextBuilder;

impl TexChunkBuilder for ColorTextBuilder {
    type Item = ColorText;

    fn chunk(
        &self,
        colored: &ColorText,
        repository: &BuilderRepository,
    ) -> Result<String, BuildError> {
        let tex = text_chunk(&colored.text, repository)?;
        Ok(match colored.color {
            Some(color) => format!(
                "\\definecolor{{theColor}}{{RGB}}{{{}}}\\textcolor{{theColor}}{{{}}}",
                color, tex
            ),
            None => tex,
        })
    }

    fn build(&self, colored: &ColorText, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        let tex = self.chunk(colored, cx.repository)?;
        cx.append(&tex);
        cx.track_all(colored.text.items());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuildTracker;
    use crate::items::{node, InlineImage, NodeRef, Reference, Referenceable, StructureElement};
    use crate::NoConverter;
    use texreport_types::Color;

    fn repository() -> BuilderRepository {
        BuilderRepository::with_defaults().unwrap()
    }

    #[test]
    fn test_plain_text_is_escaped() {
        assert_eq!(
            text_chunk(&Text::new("100% & more"), &repository()).unwrap(),
            "100\\% \\& more"
        );
        assert_eq!(text_chunk(&Text::new(""), &repository()).unwrap(), "");
    }

    #[test]
    fn test_style_then_alignment() {
        let text = Text::new("x")
            .with_font_style(FontStyle::Bold)
            .with_alignment(Alignment::Centered);
        assert_eq!(
            text_chunk(&text, &repository()).unwrap(),
            "\\begin{center}\\textbf{x}\\end{center}\n"
        );
        let slanted = Text::new("y")
            .with_font_style(FontStyle::Slanted)
            .with_alignment(Alignment::FlushRight);
        assert_eq!(
            text_chunk(&slanted, &repository()).unwrap(),
            "\\begin{flushright}\\textsl{y}\\end{flushright}\n"
        );
    }

    #[test]
    fn test_items_are_substituted_after_escaping() {
        let section = StructureElement::section("Methods");
        let text = Text::new("See {0} & {1}, not {2}")
            .with_item(node(Reference::to(&section)))
            .with_item(node(Text::new("50%").with_font_style(FontStyle::Italic)));
        assert_eq!(
            text_chunk(&text, &repository()).unwrap(),
            format!("See \\autoref{{{}}} \\& \\textit{{50\\%}}, not \\{{2\\}}", section.label())
        );
    }

    #[test]
    fn test_chunks_are_not_rescanned() {
        let text = Text::new("{0}{1}")
            .with_item(node(Text::new("@1@").with_converter(NoConverter::shared())))
            .with_item(node(Text::new("b")));
        assert_eq!(text_chunk(&text, &repository()).unwrap(), "@1@b");
    }

    #[test]
    fn test_failing_item_fails_the_text() {
        #[derive(Debug)]
        struct Opaque;
        impl crate::items::Node for Opaque {}

        let text = Text::new("{0}").with_item(node(Opaque));
        assert!(matches!(
            text_chunk(&text, &repository()),
            Err(BuildError::ChunkBuilderNotFound(_))
        ));
    }

    #[test]
    fn test_build_tracks_items() {
        let repository = repository();
        let mut tracker = BuildTracker::new();
        let image: NodeRef = node(InlineImage::new("/img/icon.png"));
        let text: NodeRef = node(Text::new("icon {0}").with_item(image.clone()));
        repository.report(&text, &mut tracker).unwrap();

        assert_eq!(
            tracker.tex(),
            "icon \\includegraphics[height=1\\baselineskip]{./figures/icon.png}\n"
        );
        assert_eq!(tracker.tracked_objects().len(), 2);
        assert!(tracker.is_tracked(&image));
        assert!(tracker.is_tracked(&text));
    }

    #[test]
    fn test_color_text() {
        let repository = repository();
        let colored = ColorText::new("alert", Color::RED);
        assert_eq!(
            repository.chunk_for(&colored).unwrap(),
            "\\definecolor{theColor}{RGB}{255,0,0}\\textcolor{theColor}{alert}"
        );
        assert_eq!(repository.chunk_for(&ColorText::uncolored("plain")).unwrap(), "plain");
    }
}
