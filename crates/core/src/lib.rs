//! # texreport-core
//!
//! Document model, builder dispatch and build tracking for TeX reports.
//!
//! - **converter**: escaping of plain text and file paths into TeX
//! - **items**: the document model (text, headings, lists, tables, figures, ...)
//! - **tex**: small writers producing TeX fragments
//! - **builder**: the builder registry, the build tracker and the built-in builders
//! - **error**: error types for dispatch and registration
//!
//! A report pass hands a sequence of nodes to a [`BuilderRepository`]. For each
//! node the repository selects the most specific registered builder, which
//! appends markup to a [`BuildTracker`] and recurses into nested nodes through
//! the repository again.
//!
//! The crate performs no I/O apart from working-directory housekeeping on
//! the tracker and attachment copies.

pub use texreport_types as types;

pub mod builder;
pub mod converter;
pub mod error;
pub mod items;
pub mod tex;

pub use builder::{
    report_all, BuildContext, BuildOutput, BuildTracker, BuilderRepository, Orientation,
    ResolvedBuilder, TexBuilder, TexChunkBuilder,
};
pub use converter::{
    ConverterWithIndices, DefaultConverter, FormulaConverter, NoConverter, TexConverter,
};
pub use error::{BuildError, DataTableError, RegistryError};
pub use items::{node, AsNodeRef, Kind, Node, NodeRef, NodeView, Referenceable};
pub use types::{Color, Label, StructureLevel};
