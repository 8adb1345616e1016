// src/error.rs
//! Error types for builder dispatch and registration.

use texreport_types::StructureLevel;
use thiserror::Error;

/// Failures raised while reporting nodes.
///
/// None of these are retried; they propagate to the caller of the pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("No TeX builder found for '{0}'")]
    BuilderNotFound(&'static str),

    #[error("No TeX chunk builder found for '{0}'")]
    ChunkBuilderNotFound(&'static str),

    #[error("Structure level {level} offset by {offset} is out of range")]
    StructureLevelOutOfRange { level: StructureLevel, offset: i32 },

    #[error("Builder for '{expected}' was handed a '{found}'")]
    KindMismatch { expected: &'static str, found: &'static str },

    #[error("Ambiguous TeX builders for '{node}': {}", kinds.join(", "))]
    AmbiguousBuilder { node: &'static str, kinds: Vec<&'static str> },
}

/// Failures raised while registering builders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("A TeX builder for '{0}' is already registered")]
    DuplicateBuilder(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataTableError {
    #[error("Row has {found} cells but the table has {expected} columns")]
    RowLength { expected: usize, found: usize },
}
