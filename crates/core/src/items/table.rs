use super::{Node, NodeRef, Referenceable, Text};
use crate::converter::{default_converter, TexConverter};
use crate::error::DataTableError;
use std::sync::Arc;
use texreport_types::Label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnType {
    #[default]
    Text,
    Number,
    /// Cells hold nodes rendered through their chunk builder.
    Node,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAlignment {
    Left,
    Right,
    Center,
}

impl ColumnAlignment {
    pub fn letter(self) -> char {
        match self {
            ColumnAlignment::Left => 'l',
            ColumnAlignment::Right => 'r',
            ColumnAlignment::Center => 'c',
        }
    }
}

#[derive(Debug, Clone)]
pub struct Column {
    pub caption: String,
    pub unit: Option<String>,
    pub column_type: ColumnType,
    pub alignment: Option<ColumnAlignment>,
    pub notes: Vec<String>,
    pub hidden: bool,
    converter: Arc<dyn TexConverter>,
}

impl Column {
    pub fn new(caption: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            caption: caption.into(),
            unit: None,
            column_type,
            alignment: None,
            notes: Vec::new(),
            hidden: false,
            converter: default_converter(),
        }
    }

    pub fn text(caption: impl Into<String>) -> Self {
        Self::new(caption, ColumnType::Text)
    }

    pub fn number(caption: impl Into<String>) -> Self {
        Self::new(caption, ColumnType::Number)
    }

    pub fn nodes(caption: impl Into<String>) -> Self {
        Self::new(caption, ColumnType::Node)
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_alignment(mut self, alignment: ColumnAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn with_converter(mut self, converter: Arc<dyn TexConverter>) -> Self {
        self.converter = converter;
        self
    }

    pub fn converter(&self) -> &dyn TexConverter {
        self.converter.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Node(NodeRef),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<NodeRef> for Cell {
    fn from(value: NodeRef) -> Self {
        Cell::Node(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Empty, Into::into)
    }
}

/// Typed columns and rows of cells. Every row has one cell per column.
///
/// Reported on its own, a data table becomes a [`Table`] captioned with its name.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    name: String,
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            name: String::new(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_row(&mut self, cells: Vec<Cell>) -> Result<(), DataTableError> {
        if cells.len() != self.columns.len() {
            return Err(DataTableError::RowLength {
                expected: self.columns.len(),
                found: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    pub fn with_row(mut self, cells: Vec<Cell>) -> Result<Self, DataTableError> {
        self.add_row(cells)?;
        Ok(self)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Indices and columns that are not hidden, in table order.
    pub fn visible_columns(&self) -> impl Iterator<Item = (usize, &Column)> {
        self.columns.iter().enumerate().filter(|(_, c)| !c.hidden)
    }

    /// Distinct notes of the visible columns in first-appearance order.
    /// A note's marker is its position here, starting at 1.
    pub fn notes(&self) -> Vec<&str> {
        let mut notes: Vec<&str> = Vec::new();
        for (_, column) in self.visible_columns() {
            for note in &column.notes {
                if !notes.contains(&note.as_str()) {
                    notes.push(note);
                }
            }
        }
        notes
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.visible_columns().next().is_none()
    }
}

impl Node for DataTable {}

/// A data table with an optional caption and a label.
#[derive(Debug, Clone)]
pub struct Table {
    pub data: DataTable,
    caption: Option<Arc<Text>>,
    label: Label,
}

impl Table {
    pub fn new(data: DataTable, caption: impl Into<Text>) -> Self {
        Self {
            data,
            caption: Some(Arc::new(caption.into())),
            label: Label::mint(),
        }
    }

    pub fn uncaptioned(data: DataTable) -> Self {
        Self {
            data,
            caption: None,
            label: Label::mint(),
        }
    }
}

impl Referenceable for Table {
    fn label(&self) -> &Label {
        &self.label
    }
}

impl Node for Table {
    fn as_referenceable(&self) -> Option<&dyn Referenceable> {
        Some(self)
    }

    fn caption(&self) -> Option<&Arc<Text>> {
        self.caption.as_ref()
    }
}

/// A data table without caption or label.
#[derive(Debug, Clone)]
pub struct SimpleTable {
    pub data: DataTable,
}

impl SimpleTable {
    pub fn new(data: DataTable) -> Self {
        Self { data }
    }
}

impl Node for SimpleTable {}
