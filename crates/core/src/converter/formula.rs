use super::{DefaultConverter, TexConverter};
use once_cell::sync::Lazy;
use std::sync::Arc;

static FORMULA: Lazy<Arc<FormulaConverter>> = Lazy::new(|| Arc::new(FormulaConverter));

/// Spaces out arithmetic operators before default escaping, so long
/// formulas can wrap.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormulaConverter;

impl FormulaConverter {
    pub fn shared() -> Arc<dyn TexConverter> {
        FORMULA.clone()
    }
}

impl TexConverter for FormulaConverter {
    fn string_to_tex(&self, text: &str) -> String {
        let mut spaced = String::with_capacity(text.len() * 2);
        for c in text.chars() {
            match c {
                '+' | '-' | '*' | '/' => {
                    spaced.push(' ');
                    spaced.push(c);
                    spaced.push(' ');
                }
                _ => spaced.push(c),
            }
        }
        while spaced.contains("  ") {
            spaced = spaced.replace("  ", " ");
        }
        DefaultConverter.string_to_tex(&spaced)
    }
}
