use super::{BuildContext, BuilderRepository, TexBuilder, TexChunkBuilder};
use crate::error::{BuildError, RegistryError};
use crate::items::{node, Cell, DataTable, Node, Referenceable, SimpleTable, Table, Text};
use crate::tex::table_writer;

pub(super) fn register(repository: &mut BuilderRepository) -> Result<(), RegistryError> {
    repository
        .register_chunk(TableBuilder)?
        .register_chunk(SimpleTableBuilder)?
        .register(DataTableBuilder)?;
    Ok(())
}

/// Tracks the nodes held in visible cells. Their markup comes from the table writer.
fn track_node_cells(data: &DataTable, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
    for row in data.rows() {
        for (index, _) in data.visible_columns() {
            if let Cell::Node(node) = &row[index] {
                cx.build_nested(node)?;
            }
        }
    }
    Ok(())
}

pub struct TableBuilder;

impl TexChunkBuilder for TableBuilder {
    type Item = Table;

    fn chunk(&self, table: &Table, repository: &BuilderRepository) -> Result<String, BuildError> {
        match table.caption() {
            Some(caption) => {
                let caption = repository.chunk_for(&**caption)?;
                table_writer::table(&table.data, &caption, table.label(), repository)
            }
            None => table_writer::simple_table(&table.data, repository),
        }
    }

    fn build(&self, table: &Table, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        if let Some(caption) = table.caption() {
            cx.track_all(caption.items());
            cx.track(caption);
        }
        track_node_cells(&table.data, cx)?;
        let tex = self.chunk(table, cx.repository)?;
        cx.append(&tex);
        Ok(())
    }
}

pub struct SimpleTableBuilder;

impl TexChunkBuilder for SimpleTableBuilder {
    type Item = SimpleTable;

    fn chunk(
        &self,
        table: &SimpleTable,
        repository: &BuilderRepository,
    ) -> Result<String, BuildError> {
        table_writer::simple_table(&table.data, repository)
    }

    fn build(&self, table: &SimpleTable, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        track_node_cells(&table.data, cx)?;
        let tex = self.chunk(table, cx.repository)?;
        cx.append(&tex);
        Ok(())
    }
}

/// Reports a bare data table as a table captioned with its name.
pub struct DataTableBuilder;

impl TexBuilder for DataTableBuilder {
    type Item = DataTable;

    fn build(&self, data: &DataTable, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        cx.report(&node(Table::new(data.clone(), Text::new(data.name()))))
    }
}
