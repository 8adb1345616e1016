pub mod color;
pub mod ids;
pub mod level;

pub use color::Color;
pub use ids::Label;
pub use level::StructureLevel;
