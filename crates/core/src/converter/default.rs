use super::criticals::{self, TEXT, TEXT_WITH_INDICES};
use super::TexConverter;
use once_cell::sync::Lazy;
use std::sync::Arc;

static DEFAULT: Lazy<Arc<DefaultConverter>> = Lazy::new(|| Arc::new(DefaultConverter));
static WITH_INDICES: Lazy<Arc<ConverterWithIndices>> = Lazy::new(|| Arc::new(ConverterWithIndices));
static NONE: Lazy<Arc<NoConverter>> = Lazy::new(|| Arc::new(NoConverter));

/// Escapes every TeX critical character, including `_`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConverter;

impl DefaultConverter {
    pub fn shared() -> Arc<dyn TexConverter> {
        DEFAULT.clone()
    }
}

impl TexConverter for DefaultConverter {
    fn string_to_tex(&self, text: &str) -> String {
        criticals::escape_text(text, &TEXT)
    }
}

/// Like [`DefaultConverter`] but keeps `_` so subscripts survive.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConverterWithIndices;

impl ConverterWithIndices {
    pub fn shared() -> Arc<dyn TexConverter> {
        WITH_INDICES.clone()
    }
}

impl TexConverter for ConverterWithIndices {
    fn string_to_tex(&self, text: &str) -> String {
        criticals::escape_text(text, &TEXT_WITH_INDICES)
    }
}

/// Passes text through untouched. File paths are still normalised.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConverter;

impl NoConverter {
    pub fn shared() -> Arc<dyn TexConverter> {
        NONE.clone()
    }
}

impl TexConverter for NoConverter {
    fn string_to_tex(&self, text: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_in_empty_out() {
        assert_eq!(DefaultConverter.string_to_tex(""), "");
        assert_eq!(ConverterWithIndices.string_to_tex(""), "");
        assert_eq!(NoConverter.string_to_tex(""), "");
    }

    #[test]
    fn test_default_escapes_criticals() {
        assert_eq!(DefaultConverter.string_to_tex("50% of $x"), "50\\% of \\$x");
        assert_eq!(DefaultConverter.string_to_tex("a_b"), "a\\_\\-b");
        assert_eq!(DefaultConverter.string_to_tex("[1]"), "{[}1{]}");
        assert_eq!(DefaultConverter.string_to_tex("a<b"), "a\\textless b");
        assert_eq!(DefaultConverter.string_to_tex("Größe"), "Gr\\\"o\\sse");
        assert_eq!(DefaultConverter.string_to_tex("m²"), "m$^2$");
    }

    #[test]
    fn test_default_collapses_double_ampersand() {
        assert_eq!(DefaultConverter.string_to_tex("A && B"), "A \\& B");
    }

    #[test]
    fn test_backslash_is_not_escaped_twice() {
        assert_eq!(DefaultConverter.string_to_tex("a\\b"), "a\\textbackslash b");
    }

    #[test]
    fn test_with_indices_keeps_underscore() {
        assert_eq!(ConverterWithIndices.string_to_tex("C_max & #"), "C_max \\& \\#");
    }

    #[test]
    fn test_no_converter_is_identity() {
        assert_eq!(NoConverter.string_to_tex("\\textbf{x}_1"), "\\textbf{x}_1");
    }

    #[test]
    fn test_file_paths() {
        assert_eq!(
            DefaultConverter.file_path_to_tex(".\\figures\\my plot.png"),
            "./figures/my\\space plot.png"
        );
        assert_eq!(NoConverter.file_path_to_tex("a b"), "a\\space b");
    }

    #[test]
    fn test_strings_to_tex_is_element_wise() {
        let input = vec!["a_b".to_string(), String::new(), "%".to_string()];
        assert_eq!(DefaultConverter.strings_to_tex(&input), vec!["a\\_\\-b", "", "\\%"]);
    }

    #[test]
    fn test_shared_instances_are_reused() {
        assert!(Arc::ptr_eq(&DefaultConverter::shared(), &DefaultConverter::shared()));
    }
}
