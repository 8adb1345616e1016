use crate::converter::TexConverter;
use texreport_types::{Label, StructureLevel};

const NO_TOC_SYMBOL: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Center,
    FlushLeft,
    FlushRight,
    Landscape,
    Figure,
    LongTabu,
    ThreePartTable,
    TableNotes,
    Minipage,
}

impl Environment {
    pub fn name(self) -> &'static str {
        match self {
            Environment::Center => "center",
            Environment::FlushLeft => "flushleft",
            Environment::FlushRight => "flushright",
            Environment::Landscape => "landscape",
            Environment::Figure => "figure",
            Environment::LongTabu => "longtabu",
            Environment::ThreePartTable => "ThreePartTable",
            Environment::TableNotes => "tablenotes",
            Environment::Minipage => "minipage",
        }
    }
}

pub fn begin(environment: Environment) -> String {
    format!("\\begin{{{}}}", environment.name())
}

pub fn begin_with(environment: Environment, options: &str) -> String {
    format!("\\begin{{{}}}[{}]", environment.name(), options)
}

pub fn end(environment: Environment) -> String {
    format!("\\end{{{}}}\n", environment.name())
}

pub fn line_feed() -> &'static str {
    "\n"
}

pub fn line_break() -> &'static str {
    "\\\\\n"
}

pub fn par() -> &'static str {
    "\\par\n"
}

pub fn no_indent() -> &'static str {
    "\\noindent\n"
}

pub fn centering() -> &'static str {
    "\\centering\n"
}

pub fn base_line_skip(lines: u32) -> String {
    format!("{}\\baselineskip", lines)
}

/// Moves to the next page unless `lines` baselines are still free.
pub fn needspace(lines: u32) -> String {
    format!("\\Needspace{{{}}}", base_line_skip(lines))
}

/// A fraction of `\textwidth`; 100 percent collapses to the bare length.
pub fn percent_of_text_width(percentage: f64) -> String {
    percent_of("\\textwidth", percentage)
}

pub fn percent_of_text_height(percentage: f64) -> String {
    percent_of("\\textheight", percentage)
}

fn percent_of(length: &str, percentage: f64) -> String {
    let factor = percentage / 100.0;
    if factor == 1.0 {
        length.to_string()
    } else {
        format!("{}{}", factor, length)
    }
}

pub fn rule(raise: &str, width: &str, thickness: &str) -> String {
    format!("\\rule[{}]{{{}}}{{{}}}", raise, width, thickness)
}

pub fn bold(text: &str) -> String {
    format!("\\textbf{{{}}}", text)
}

pub fn italic(text: &str) -> String {
    format!("\\textit{{{}}}", text)
}

pub fn slanted(text: &str) -> String {
    format!("\\textsl{{{}}}", text)
}

pub fn caption(caption: &str) -> String {
    format!("\\caption{{{}}}\n", caption)
}

pub fn label(label: &Label) -> String {
    format!("\\label{{{}}}", label)
}

pub fn reference(label: &Label) -> String {
    format!("\\autoref{{{}}}", label)
}

pub fn reference_with_page(label: &Label) -> String {
    format!("\\autoref{{{0}}} on page~\\pageref{{{0}}}", label)
}

pub fn text_box(title: &str, text: &str) -> String {
    format!("\\textbox{{{}}}{{{}}}\n", title, text)
}

pub fn side_by_side(left: &str, right: &str) -> String {
    let mut tex = String::new();
    for (i, side) in [left, right].into_iter().enumerate() {
        if i > 0 {
            tex.push_str("\\hfill%\n");
        }
        tex.push_str(&begin_with(Environment::Minipage, "t"));
        tex.push_str("{0.45\\linewidth}\n");
        tex.push_str(side);
        tex.push_str(&end(Environment::Minipage));
    }
    tex
}

/// `\section{name}`, or `\section*{name}` when kept out of the table of contents.
pub fn structure_element(
    level: StructureLevel,
    name: &str,
    converter: &dyn TexConverter,
    in_toc: bool,
) -> String {
    format!(
        "\\{}{}{{{}}}\n",
        level.command(),
        if in_toc { "" } else { NO_TOC_SYMBOL },
        converter.string_to_tex(name)
    )
}

/// `\section[toc title]{name}`.
pub fn structure_element_with_toc(
    level: StructureLevel,
    name: &str,
    converter: &dyn TexConverter,
    toc_title: &str,
) -> String {
    format!(
        "\\{}[{}]{{{}}}\n",
        level.command(),
        converter.string_to_tex(toc_title),
        converter.string_to_tex(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::{DefaultConverter, NoConverter};

    #[test]
    fn test_environments() {
        assert_eq!(begin(Environment::Center), "\\begin{center}");
        assert_eq!(begin_with(Environment::Minipage, "t"), "\\begin{minipage}[t]");
        assert_eq!(end(Environment::Landscape), "\\end{landscape}\n");
    }

    #[test]
    fn test_lengths() {
        assert_eq!(needspace(6), "\\Needspace{6\\baselineskip}");
        assert_eq!(percent_of_text_width(100.0), "\\textwidth");
        assert_eq!(percent_of_text_height(90.0), "0.9\\textheight");
        assert_eq!(percent_of_text_width(40.0), "0.4\\textwidth");
    }

    #[test]
    fn test_structure_elements() {
        assert_eq!(
            structure_element(StructureLevel::Section, "A_B", &DefaultConverter, true),
            "\\section{A\\_\\-B}\n"
        );
        assert_eq!(
            structure_element(StructureLevel::Paragraph, "P", &NoConverter, false),
            "\\paragraph*{P}\n"
        );
        assert_eq!(
            structure_element_with_toc(StructureLevel::Chapter, "Long", &NoConverter, "Short"),
            "\\chapter[Short]{Long}\n"
        );
    }

    #[test]
    fn test_side_by_side() {
        let tex = side_by_side("L", "R");
        assert_eq!(
            tex,
            "\\begin{minipage}[t]{0.45\\linewidth}\nL\\end{minipage}\n\\hfill%\n\
             \\begin{minipage}[t]{0.45\\linewidth}\nR\\end{minipage}\n"
        );
    }

    #[test]
    fn test_references() {
        let marker = Label::new("abc");
        assert_eq!(reference(&marker), "\\autoref{abc}");
        assert_eq!(reference_with_page(&marker), "\\autoref{abc} on page~\\pageref{abc}");
        assert_eq!(label(&marker), "\\label{abc}");
    }
}
