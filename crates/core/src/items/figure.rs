use super::{FigurePosition, Node, Referenceable, Text};
use crate::builder::BuildTracker;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use texreport_types::Label;

pub const FIGURES_FOLDER: &str = "figures";
pub const PLOTS_FOLDER: &str = "plots";

/// An external file that has to sit next to the TeX source when compiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    full_path: PathBuf,
    subfolder: &'static str,
}

impl Attachment {
    pub fn new(full_path: impl Into<PathBuf>, subfolder: &'static str) -> Self {
        Self {
            full_path: full_path.into(),
            subfolder,
        }
    }

    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    pub fn subfolder(&self) -> &'static str {
        self.subfolder
    }

    pub fn file_name(&self) -> &str {
        self.full_path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
    }

    /// Path as written into the TeX source, relative to the working directory.
    pub fn relative_file_path(&self) -> String {
        format!("./{}/{}", self.subfolder, self.file_name())
    }

    /// Copies the file into `<working_dir>/<subfolder>`. An existing target is kept.
    pub fn copy_to_working_directory(&self, working_dir: &Path) -> io::Result<PathBuf> {
        let folder = working_dir.join(self.subfolder);
        fs::create_dir_all(&folder)?;
        let target = folder.join(self.file_name());
        if !target.exists() {
            fs::copy(&self.full_path, &target)?;
        }
        Ok(target)
    }
}

#[derive(Debug, Clone)]
pub struct Figure {
    attachment: Attachment,
    caption: Arc<Text>,
    label: Label,
    pub position: FigurePosition,
}

impl Figure {
    pub fn new(caption: impl Into<Text>, full_path: impl Into<PathBuf>) -> Self {
        Self {
            attachment: Attachment::new(full_path, FIGURES_FOLDER),
            caption: Arc::new(caption.into()),
            label: Label::mint(),
            position: FigurePosition::default(),
        }
    }

    /// A figure whose file will be produced inside the tracker's `figures` folder.
    pub fn for_creation(
        caption: impl Into<Text>,
        file_name: &str,
        tracker: &BuildTracker,
    ) -> io::Result<Self> {
        let working_dir = tracker.working_directory().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "build tracker has no working directory")
        })?;
        let folder = working_dir.join(FIGURES_FOLDER);
        fs::create_dir_all(&folder)?;
        Ok(Self::new(caption, folder.join(file_name)))
    }

    pub fn with_position(mut self, position: FigurePosition) -> Self {
        self.position = position;
        self
    }

    pub fn attachment(&self) -> &Attachment {
        &self.attachment
    }

}

impl Referenceable for Figure {
    fn label(&self) -> &Label {
        &self.label
    }
}

impl Node for Figure {
    fn as_referenceable(&self) -> Option<&dyn Referenceable> {
        Some(self)
    }

    fn as_attachment(&self) -> Option<&Attachment> {
        Some(&self.attachment)
    }

    fn caption(&self) -> Option<&Arc<Text>> {
        Some(&self.caption)
    }
}

/// An image scaled to the line height, placed inside running text.
#[derive(Debug, Clone)]
pub struct InlineImage {
    attachment: Attachment,
}

impl InlineImage {
    pub fn new(full_path: impl Into<PathBuf>) -> Self {
        Self {
            attachment: Attachment::new(full_path, FIGURES_FOLDER),
        }
    }

    pub fn attachment(&self) -> &Attachment {
        &self.attachment
    }
}

impl Node for InlineImage {
    fn as_attachment(&self) -> Option<&Attachment> {
        Some(&self.attachment)
    }
}
