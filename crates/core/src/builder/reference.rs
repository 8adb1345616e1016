use super::{BuilderRepository, TexChunkBuilder};
use crate::error::{BuildError, RegistryError};
use crate::items::{Reference, ReferenceStyle};
use crate::tex::helper;

pub(super) fn register(repository: &mut BuilderRepository) -> Result<(), RegistryError> {
    repository.register_chunk(ReferenceBuilder)?;
    Ok(())
}

pub struct ReferenceBuilder;

impl TexChunkBuilder for ReferenceBuilder {
    type Item = Reference;

    fn chunk(
        &self,
        reference: &Reference,
        _repository: &BuilderRepository,
    ) -> Result<String, BuildError> {
        Ok(match reference.style {
            ReferenceStyle::Auto => helper::reference(reference.label()),
            ReferenceStyle::WithPage => helper::reference_with_page(reference.label()),
        })
    }
}
