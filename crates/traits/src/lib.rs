pub mod compiler;
pub mod image;

pub use compiler::{validate_input, CompileCall, CompileError, RecordingTexCompiler, TexCompiler};
pub use image::{
    ConvertCall, ImageConverter, ImageFormat, RecordingImageConverter, DEFAULT_RESOLUTION,
};
