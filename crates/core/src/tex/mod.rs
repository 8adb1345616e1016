//! Writers producing TeX fragments.
//!
//! These are plain string builders. Escaping is the caller's responsibility
//! unless a function takes a converter.

pub mod equation_writer;
pub mod figure_writer;
pub mod helper;
pub mod list_writer;
pub mod table_writer;

pub use helper::Environment;
