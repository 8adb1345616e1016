use super::helper::{self, Environment};
use crate::builder::Orientation;
use crate::converter::TexConverter;
use texreport_types::Label;

/// Float placement specifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FigurePosition {
    HereOrTop,
    Bottom,
    Top,
    Page,
    Anywhere,
    #[default]
    Here,
}

impl FigurePosition {
    pub fn specifier(self) -> &'static str {
        match self {
            FigurePosition::HereOrTop => "ht",
            FigurePosition::Bottom => "b",
            FigurePosition::Top => "t",
            FigurePosition::Page => "p",
            FigurePosition::Anywhere => "htbp",
            FigurePosition::Here => "H",
        }
    }
}

fn include_graphics(options: &str, file_name: &str, converter: &dyn TexConverter) -> String {
    format!("\\includegraphics[{}]{{{}}}\n", options, converter.file_path_to_tex(file_name))
}

/// An image scaled to the height of one text line.
pub fn inline_graphic(file_name: &str, converter: &dyn TexConverter) -> String {
    include_graphics(&format!("height={}", helper::base_line_skip(1)), file_name, converter)
}

/// A floating figure. In landscape the page's text width and height swap roles.
pub fn include_figure(
    position: FigurePosition,
    caption: &str,
    label: &Label,
    file_name: &str,
    orientation: Orientation,
    converter: &dyn TexConverter,
) -> String {
    let mut tex = helper::begin(Environment::Figure);
    tex.push_str(&format!("[{}]\n", position.specifier()));
    tex.push_str(helper::no_indent());
    tex.push_str(helper::centering());
    let options = match orientation {
        Orientation::Landscape => format!(
            "max height={}, max width={}, keepaspectratio",
            helper::percent_of_text_width(90.0),
            helper::percent_of_text_height(100.0)
        ),
        Orientation::Portrait => format!(
            "max height={}, max width={}, keepaspectratio",
            helper::percent_of_text_height(90.0),
            helper::percent_of_text_width(100.0)
        ),
    };
    tex.push_str(&include_graphics(&options, file_name, converter));
    tex.push_str(&helper::caption(caption));
    tex.push_str(&helper::label(label));
    tex.push_str(&helper::end(Environment::Figure));
    tex
}
