use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading ranks, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureLevel {
    Part,
    Chapter,
    Section,
    SubSection,
    SubSubSection,
    Paragraph,
    SubParagraph,
}

impl StructureLevel {
    pub const ALL: [StructureLevel; 7] = [
        StructureLevel::Part,
        StructureLevel::Chapter,
        StructureLevel::Section,
        StructureLevel::SubSection,
        StructureLevel::SubSubSection,
        StructureLevel::Paragraph,
        StructureLevel::SubParagraph,
    ];

    /// The sectioning command without its backslash.
    pub fn command(self) -> &'static str {
        match self {
            StructureLevel::Part => "part",
            StructureLevel::Chapter => "chapter",
            StructureLevel::Section => "section",
            StructureLevel::SubSection => "subsection",
            StructureLevel::SubSubSection => "subsubsection",
            StructureLevel::Paragraph => "paragraph",
            StructureLevel::SubParagraph => "subparagraph",
        }
    }

    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn from_rank(rank: usize) -> Option<Self> {
        Self::ALL.get(rank).copied()
    }

    /// The level `offset` ranks below (positive) or above (negative) this one.
    /// Returns `None` when that falls outside part..=subparagraph.
    pub fn offset(self, offset: i32) -> Option<Self> {
        let target = self.rank() as i64 + i64::from(offset);
        usize::try_from(target).ok().and_then(Self::from_rank)
    }

    /// Paragraph-level headings are run-in and never listed in the table of contents.
    pub fn is_run_in(self) -> bool {
        matches!(self, StructureLevel::Paragraph | StructureLevel::SubParagraph)
    }
}

impl fmt::Display for StructureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}
