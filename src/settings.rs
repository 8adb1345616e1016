// src/settings.rs
//! Report-level settings: document metadata, template location and compile options.
//!
//! Settings are usually loaded from camelCase JSON and are written into the
//! copied template by [`ReportSettings::implement`].

use crate::error::ReportError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use texreport_core::converter::{default_converter, TexConverter};

/// Colors the report is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorStyle {
    #[default]
    Color,
    GrayScale,
    BlackAndWhite,
}

impl ColorStyle {
    /// The option value the report template expects.
    pub fn as_tex(self) -> &'static str {
        match self {
            ColorStyle::Color => "RGB",
            ColorStyle::GrayScale => "gray",
            ColorStyle::BlackAndWhite => "monochrome",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportFont {
    #[default]
    Default,
    Helvetica,
    Optima,
    ComputerModernTeletype,
    Courier,
    Bookman,
    Inconsolata,
    LatinModern,
}

impl ReportFont {
    pub fn as_tex(self) -> &'static str {
        match self {
            ReportFont::Default => "Default",
            ReportFont::Helvetica => "Helvetica",
            ReportFont::Optima => "Optima",
            ReportFont::ComputerModernTeletype => "ComputerModernTeletype",
            ReportFont::Courier => "Courier",
            ReportFont::Bookman => "Bookman",
            ReportFont::Inconsolata => "Inconsolata",
            ReportFont::LatinModern => "LatinModern",
        }
    }
}

/// Everything a report run needs besides the nodes themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportSettings {
    pub author: String,
    pub title: String,
    pub sub_title: String,
    pub keywords: Vec<String>,
    /// Name of the generating software, without version.
    pub software: String,
    pub software_version: String,
    pub platform: String,
    /// Folder holding `<folder name>.tex` and its companion files.
    pub template_folder: PathBuf,
    /// Base name of the generated content file, without `.tex`.
    pub content_file_name: String,
    pub font: ReportFont,
    pub delete_working_dir: bool,
    pub draft: bool,
    /// Carried for callers; the library never opens the report itself.
    pub open_report: bool,
    pub save_artifacts: bool,
    pub color_style: ColorStyle,
    pub number_of_compilations: u32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            author: String::new(),
            title: String::new(),
            sub_title: String::new(),
            keywords: Vec::new(),
            software: String::new(),
            software_version: String::new(),
            platform: format!("{} {}", std::env::consts::OS, std::env::consts::ARCH),
            template_folder: PathBuf::new(),
            content_file_name: String::new(),
            font: ReportFont::default(),
            delete_working_dir: true,
            draft: false,
            open_report: true,
            save_artifacts: false,
            color_style: ColorStyle::default(),
            number_of_compilations: 3,
        }
    }
}

impl ReportSettings {
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks the settings before a run. The template folder must exist and
    /// contain its layout file.
    pub fn validate(&self) -> Result<(), ReportError> {
        let required = [
            (&self.author, "Author is missing."),
            (&self.title, "Title is missing."),
            (&self.sub_title, "Subtitle is missing."),
            (&self.software, "Software is missing."),
            (&self.software_version, "Version is missing."),
        ];
        if let Some((_, message)) = required.iter().find(|(value, _)| value.is_empty()) {
            return Err(ReportError::Settings((*message).to_string()));
        }
        if self.template_folder.as_os_str().is_empty() {
            return Err(ReportError::Settings("The template folder name is missing.".into()));
        }
        if self.content_file_name.is_empty() {
            return Err(ReportError::Settings(
                "The name of the content file is empty. Please specify a content file name.".into(),
            ));
        }
        if !self.template_folder.is_dir() {
            return Err(ReportError::Settings(format!(
                "The template folder '{}' does not exist. \
                 Please specify an existing template folder.",
                self.template_folder.display()
            )));
        }
        let template_name = self.template_name()?;
        if !self.template_folder.join(&template_name).is_file() {
            return Err(ReportError::Settings(format!(
                "The template folder '{}' does not contain the expected layout tex file '{}'",
                self.template_folder.display(),
                template_name
            )));
        }
        Ok(())
    }

    /// `<template folder name>.tex`
    pub fn template_name(&self) -> Result<String, ReportError> {
        self.template_folder
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| format!("{}.tex", name))
            .ok_or_else(|| {
                ReportError::Settings(format!(
                    "The template folder '{}' has no usable name",
                    self.template_folder.display()
                ))
            })
    }

    pub fn template_full_path(&self) -> Result<PathBuf, ReportError> {
        Ok(self.template_folder.join(self.template_name()?))
    }

    /// Replaces the setting placeholders in `tex_file` in place.
    pub fn implement(&self, tex_file: &Path) -> Result<(), ReportError> {
        let contents = fs::read_to_string(tex_file)?;
        fs::write(tex_file, self.substitute(&contents))?;
        Ok(())
    }

    fn substitute(&self, contents: &str) -> String {
        let converter = default_converter();
        let keywords = self
            .keywords
            .iter()
            .map(|keyword| format!("{{{}}}", converter.string_to_tex(keyword)))
            .join("; ");
        let content_file = converter.file_path_to_tex(&format!("./{}", self.content_file_name));

        // @SOFTWAREVERSION has to go before its prefix @SOFTWARE.
        let replacements = [
            ("@AUTHOR", converter.string_to_tex(&self.author)),
            ("@TITLE", converter.string_to_tex(&self.title)),
            ("@SUBTITLE", converter.string_to_tex(&self.sub_title)),
            ("@KEYWORDS", keywords),
            ("@CONTENTFILE", content_file),
            ("@SOFTWAREVERSION", converter.string_to_tex(&self.software_version)),
            ("@SOFTWARE", converter.string_to_tex(&self.software)),
            ("@PLATFORM", converter.string_to_tex(&self.platform)),
            ("@COLORSTYLE", self.color_style.as_tex().to_string()),
            ("@DRAFT", if self.draft { "stamp" } else { "nostamp" }.to_string()),
            ("@FONT", self.font.as_tex().to_string()),
        ];
        replacements
            .iter()
            .fold(contents.to_string(), |text, (token, value)| text.replace(token, value))
    }
}
