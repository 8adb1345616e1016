//! Escaping of plain strings and file paths into TeX.
//!
//! Every node carries an `Arc<dyn TexConverter>`; the shared
//! [`DefaultConverter`] is used unless the node was given another one.

mod criticals;
mod default;
mod formula;

pub use default::{ConverterWithIndices, DefaultConverter, NoConverter};
pub use formula::FormulaConverter;

use std::fmt::Debug;
use std::sync::Arc;

/// Turns raw text into TeX source. Total over all input; empty in, empty out.
pub trait TexConverter: Send + Sync + Debug {
    fn string_to_tex(&self, text: &str) -> String;

    fn strings_to_tex(&self, texts: &[String]) -> Vec<String> {
        texts.iter().map(|t| self.string_to_tex(t)).collect()
    }

    fn file_path_to_tex(&self, path: &str) -> String {
        criticals::replace(path, &criticals::FILE_PATH)
    }
}

/// The converter nodes use when none was configured.
pub fn default_converter() -> Arc<dyn TexConverter> {
    DefaultConverter::shared()
}
