// src/lib.rs
//! # texreport
//!
//! Programmatic report authoring. Callers assemble a list of document nodes
//! (headings, text, lists, tables, figures, ...), and a [`ReportCreator`] turns
//! them into TeX, fills a report template and compiles it to PDF.
//!
//! ```no_run
//! use texreport::prelude::*;
//!
//! # async fn run() -> Result<(), ReportError> {
//! let creator = ReportCreatorBuilder::new().build()?;
//! let settings = ReportSettings::from_file("report-settings.json")?;
//! let nodes = vec![
//!     node(StructureElement::chapter("Results")),
//!     node(Text::new("All runs converged.")),
//! ];
//! creator.report_to_pdf("/reports/study.pdf", &settings, &nodes).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The builder dispatch lives in [`texreport_core`], the toolchain contracts in
//! [`texreport_traits`] and their subprocess implementations in
//! [`texreport_process`].

pub mod artifacts;
pub mod builder;
pub mod compiler;
pub mod creator;
pub mod error;
pub mod events;
pub mod settings;
pub mod tracker_factory;

pub use artifacts::ArtifactsManager;
pub use builder::ReportCreatorBuilder;
pub use compiler::ReportCompiler;
pub use creator::ReportCreator;
pub use error::ReportError;
pub use events::{ReportEvent, ReportEventReceiver, ReportEventSender};
pub use settings::{ColorStyle, ReportFont, ReportSettings};
pub use tracker_factory::BuildTrackerFactory;

pub use texreport_core::{converter, items, tex};
pub use texreport_process as process;
pub use texreport_traits as traits;

pub use texreport_core::{
    report_all, BuildError, BuildOutput, BuildTracker, BuilderRepository, Node, NodeRef,
    RegistryError,
};
pub use texreport_traits::{CompileError, ImageConverter, ImageFormat, TexCompiler};

/// The types most report code needs.
pub mod prelude {
    pub use crate::{ReportCreator, ReportCreatorBuilder, ReportError, ReportEvent, ReportSettings};
    pub use texreport_core::items::{
        node, Cell, ColorText, Column, DataTable, Figure, InLandscape, LineBreak, List, Par,
        Reference, SimpleTable, StructureElement, Table, Text, TextBox,
    };
    pub use texreport_core::{BuildTracker, BuilderRepository, NodeRef};
}
