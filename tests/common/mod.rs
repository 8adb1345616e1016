// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use texreport::ReportSettings;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub const TEMPLATE_NAME: &str = "StandardTemplate";

/// Layout file with every settings placeholder.
pub const TEMPLATE_SOURCE: &str = "\\documentclass[@COLORSTYLE,@DRAFT]{report}\n\
\\author{@AUTHOR}\\title{@TITLE}\\subtitle{@SUBTITLE}\n\
\\keywords{@KEYWORDS}\\software{@SOFTWARE @SOFTWAREVERSION on @PLATFORM}\\font{@FONT}\n\
\\begin{document}\\input{@CONTENTFILE}\\end{document}\n";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A temporary output folder with a report template in it.
pub struct ReportFixture {
    pub dir: TempDir,
    pub template_folder: PathBuf,
}

impl ReportFixture {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        init_logger();
        let dir = TempDir::new()?;
        let template_folder = dir.path().join("templates").join(TEMPLATE_NAME);
        fs::create_dir_all(&template_folder)?;
        fs::write(template_folder.join(format!("{}.tex", TEMPLATE_NAME)), TEMPLATE_SOURCE)?;
        fs::write(template_folder.join("style.sty"), "% style")?;
        Ok(Self { dir, template_folder })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn report_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(format!("{}.pdf", name))
    }

    pub fn settings(&self) -> ReportSettings {
        ReportSettings {
            author: "Modeling Team".into(),
            title: "Study Report".into(),
            sub_title: "Simulation Results".into(),
            keywords: vec!["PK".into(), "Simulation".into()],
            software: "Suite".into(),
            software_version: "11.2".into(),
            template_folder: self.template_folder.clone(),
            content_file_name: "content".into(),
            ..ReportSettings::default()
        }
    }

    /// Writes a small file that can serve as a figure.
    pub fn image(&self, name: &str) -> Result<PathBuf, std::io::Error> {
        let path = self.dir.path().join(name);
        fs::write(&path, b"image")?;
        Ok(path)
    }
}
