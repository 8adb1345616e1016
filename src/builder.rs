// src/builder.rs
use crate::artifacts::ArtifactsManager;
use crate::compiler::ReportCompiler;
use crate::creator::ReportCreator;
use crate::error::ReportError;
use crate::events::ReportEventSender;
use crate::tracker_factory::BuildTrackerFactory;
use std::sync::Arc;
use texreport_core::BuilderRepository;
use texreport_process::{CompilerConfiguration, GhostscriptConverter, TexifyCompiler};
use texreport_traits::{ImageConverter, TexCompiler};

/// A builder for creating a `ReportCreator`.
///
/// Anything left unset falls back to the built-in builders and to the
/// installed toolchain located through [`CompilerConfiguration::from_env`].
#[derive(Default)]
pub struct ReportCreatorBuilder {
    repository: Option<Arc<BuilderRepository>>,
    tex_compiler: Option<Arc<dyn TexCompiler>>,
    image_converter: Option<Arc<dyn ImageConverter>>,
    configuration: Option<CompilerConfiguration>,
    tracker_factory: BuildTrackerFactory,
    events: Option<ReportEventSender>,
}

impl ReportCreatorBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Uses `repository` instead of [`BuilderRepository::with_defaults`].
    pub fn with_repository(mut self, repository: impl Into<Arc<BuilderRepository>>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    pub fn with_tex_compiler(mut self, compiler: Arc<dyn TexCompiler>) -> Self {
        self.tex_compiler = Some(compiler);
        self
    }

    pub fn with_image_converter(mut self, converter: Arc<dyn ImageConverter>) -> Self {
        self.image_converter = Some(converter);
        self
    }

    /// Toolchain lookup for the process-backed collaborators.
    pub fn with_compiler_configuration(mut self, configuration: CompilerConfiguration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    pub fn with_events(mut self, sender: ReportEventSender) -> Self {
        self.events = Some(sender);
        self
    }

    /// Names new working directories with `name` instead of a minted token.
    pub fn with_working_dir_name<F>(mut self, name: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.tracker_factory = self.tracker_factory.with_working_dir_name(name);
        self
    }

    pub fn build(self) -> Result<ReportCreator, ReportError> {
        let repository = match self.repository {
            Some(repository) => repository,
            None => Arc::new(BuilderRepository::with_defaults()?),
        };
        let configuration = self.configuration.unwrap_or_else(CompilerConfiguration::from_env);
        let tex_compiler = self
            .tex_compiler
            .unwrap_or_else(|| Arc::new(TexifyCompiler::new(configuration.clone())));
        let image_converter = self
            .image_converter
            .unwrap_or_else(|| Arc::new(GhostscriptConverter::new(configuration)));
        log::info!(
            "Report creator uses {} and {}",
            tex_compiler.name(),
            image_converter.name()
        );

        Ok(ReportCreator::new(
            repository,
            ReportCompiler::new(tex_compiler),
            ArtifactsManager::new(image_converter),
            self.tracker_factory,
            self.events,
        ))
    }
}
