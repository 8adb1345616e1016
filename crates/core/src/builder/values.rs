use super::{BuildContext, BuilderRepository, TexChunkBuilder};
use crate::converter::{DefaultConverter, TexConverter};
use crate::error::{BuildError, RegistryError};
use crate::items::{node, Text};
use crate::tex::list_writer;
use std::marker::PhantomData;

pub(super) fn register(repository: &mut BuilderRepository) -> Result<(), RegistryError> {
    repository
        .register_chunk(StringBuilder::<String>::new())?
        .register_chunk(StringBuilder::<&'static str>::new())?
        .register_chunk(StringArrayBuilder)?;
    Ok(())
}

/// Plain strings go through a fresh [`Text`] with default settings.
pub struct StringBuilder<T>(PhantomData<fn() -> T>);

impl<T> StringBuilder<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for StringBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AsRef<str> + 'static> TexChunkBuilder for StringBuilder<T> {
    type Item = T;

    fn chunk(&self, value: &T, repository: &BuilderRepository) -> Result<String, BuildError> {
        repository.chunk_for(&Text::new(value.as_ref()))
    }

    /// Reports the wrapping text, so the text is what gets tracked.
    fn build(&self, value: &T, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        cx.report(&node(Text::new(value.as_ref())))
    }
}

/// A list of strings becomes an itemized list.
pub struct StringArrayBuilder;

impl TexChunkBuilder for StringArrayBuilder {
    type Item = Vec<String>;

    fn chunk(
        &self,
        values: &Vec<String>,
        _repository: &BuilderRepository,
    ) -> Result<String, BuildError> {
        Ok(list_writer::itemized(&DefaultConverter.strings_to_tex(values)))
    }
}
