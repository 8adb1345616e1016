//! ImageConverter trait for rasterizing PDF artifacts.

use crate::compiler::{validate_input, CompileError};
use std::fmt::{self, Debug};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default resolution in dots per inch.
pub const DEFAULT_RESOLUTION: u32 = 144;

/// Raster formats a PDF page can be converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    Jpg,
    #[default]
    Png,
    Bmp,
}

impl ImageFormat {
    /// Ghostscript output device for this format.
    pub fn device(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpeg",
            ImageFormat::Png => "pngalpha",
            ImageFormat::Bmp => "bmp256",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Bmp => "bmp",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Converts a PDF into a raster image placed next to it.
pub trait ImageConverter: Send + Sync + Debug {
    fn convert_pdf(
        &self,
        pdf_file: &Path,
        format: ImageFormat,
        resolution: u32,
    ) -> Result<PathBuf, CompileError>;

    fn name(&self) -> &'static str;
}

/// One recorded `convert_pdf` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertCall {
    pub pdf_file: PathBuf,
    pub format: ImageFormat,
    pub resolution: u32,
}

/// A converter that only records what it was asked to convert.
#[derive(Debug, Default)]
pub struct RecordingImageConverter {
    calls: Mutex<Vec<ConvertCall>>,
}

impl RecordingImageConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ConvertCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl ImageConverter for RecordingImageConverter {
    fn convert_pdf(
        &self,
        pdf_file: &Path,
        format: ImageFormat,
        resolution: u32,
    ) -> Result<PathBuf, CompileError> {
        let (directory, stem) = validate_input(pdf_file, "pdf")?;
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(ConvertCall {
                pdf_file: pdf_file.to_path_buf(),
                format,
                resolution,
            });
        }
        Ok(directory.join(format!("{}.{}", stem, format.extension())))
    }

    fn name(&self) -> &'static str {
        "RecordingImageConverter"
    }
}
