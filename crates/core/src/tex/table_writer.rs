//! Long tables spanning pages, with a repeated header and optional notes.

use super::helper::{self, Environment};
use crate::builder::BuilderRepository;
use crate::converter::{DefaultConverter, TexConverter};
use crate::error::BuildError;
use crate::items::{Cell, Column, ColumnType, DataTable};
use itertools::Itertools;
use texreport_types::Label;

const VALUE_SEPARATOR: &str = " & ";
const VERTICAL_LINE: &str = "|";
const ARRAY_STRETCH: f64 = 1.2;
const TABLE_WIDTH: f64 = 0.95;
const SPACE_NEEDED: u32 = 6;
const HLINE: &str = "\\hline\n";
const PHANTOM_LINE: &str = "\\tabuphantomline\n";

/// Page break hints passed to `\pagebreak[n]` at the start of each row.
const BREAK_MEDIUM: u8 = 2;
const BREAK_HIGH: u8 = 3;

/// A table with caption and label. Empty tables produce no markup.
pub fn table(
    data: &DataTable,
    caption: &str,
    label: &Label,
    repository: &BuilderRepository,
) -> Result<String, BuildError> {
    write(data, Some((caption, label)), repository)
}

/// A table without caption; the table counter is kept unchanged.
pub fn simple_table(
    data: &DataTable,
    repository: &BuilderRepository,
) -> Result<String, BuildError> {
    write(data, None, repository)
}

/// Formats a number with at most three decimals and no trailing zeros.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" { "0".to_string() } else { trimmed.to_string() }
}

fn write(
    data: &DataTable,
    caption: Option<(&str, &Label)>,
    repository: &BuilderRepository,
) -> Result<String, BuildError> {
    if data.is_empty() {
        return Ok(String::new());
    }
    let notes = data.notes();
    let has_notes = !notes.is_empty();

    let mut tex = helper::needspace(SPACE_NEEDED);
    tex.push_str(&helper::begin(Environment::Center));
    tex.push_str(&format!("\n\\renewcommand{{\\arraystretch}}{{{}}}\n", ARRAY_STRETCH));
    if has_notes {
        tex.push_str(&helper::begin(Environment::ThreePartTable));
    }
    tex.push_str(&helper::begin(Environment::LongTabu));
    tex.push_str(&format!(" to {}\\linewidth", TABLE_WIDTH));
    tex.push_str(&column_design(data));
    tex.push_str(&long_table_header(data, &notes));
    tex.push_str(&rows(data, repository)?);
    tex.push_str(HLINE);

    if let Some((caption, label)) = caption {
        tex.push_str(&helper::caption(caption));
        tex.push_str(&helper::label(label));
        tex.push_str(helper::line_break());
    }
    tex.push_str(&helper::end(Environment::LongTabu));
    if caption.is_none() {
        // longtabu always steps the counter
        tex.push_str("\\addtocounter{table}{-1}\n");
    }
    if has_notes {
        tex.push_str(&table_notes(&notes));
        tex.push_str(&helper::end(Environment::ThreePartTable));
    }
    tex.push_str(&helper::end(Environment::Center));
    Ok(tex)
}

fn column_design(data: &DataTable) -> String {
    let mut design = String::from("{");
    for (_, column) in data.visible_columns() {
        design.push_str(&format!(" {} ", VERTICAL_LINE));
        let spec = match (column.column_type, column.alignment) {
            (ColumnType::Number, None) => ">{\\tabudecimal \\alignnumbers}X[-2]".to_string(),
            (ColumnType::Number, Some(alignment)) => format!("X[-1,{}]", alignment.letter()),
            (_, None) => "X[-1]".to_string(),
            (_, Some(alignment)) => format!("X[-1, {}]", alignment.letter()),
        };
        design.push_str(&spec);
    }
    design.push_str(&format!(" {} ", VERTICAL_LINE));
    design.push_str("}\n");
    design
}

fn multi_column(count: usize, alignment: char, content: &str) -> String {
    format!("\\multicolumn{{{0}}}{{{1}{2}{1}}}{{{3}}}", count, VERTICAL_LINE, alignment, content)
}

fn note_marker(column: &Column, notes: &[&str]) -> String {
    let symbols = column
        .notes
        .iter()
        .filter_map(|note| notes.iter().position(|n| n == note))
        .map(|index| index + 1)
        .join(", ");
    if symbols.is_empty() {
        return String::new();
    }
    format!("\\textsuperscript{{\\TPTtagStyle{{{}}}}}", symbols)
}

fn header(data: &DataTable, notes: &[&str]) -> String {
    let cells = data
        .visible_columns()
        .map(|(_, column)| {
            let converter = column.converter();
            let mut cell = format!("{{{}}}", converter.string_to_tex(&column.caption));
            cell.push_str(&note_marker(column, notes));
            if let Some(unit) = column.unit.as_deref().filter(|u| !u.is_empty()) {
                cell.push_str(&format!(" [{}]", converter.string_to_tex(unit)));
            }
            cell
        })
        .join(VALUE_SEPARATOR);
    format!("\\rowfont[c]{{\\bfseries}}\n{}{}", cells, helper::line_break())
}

fn long_table_header(data: &DataTable, notes: &[&str]) -> String {
    let header = header(data, notes);
    let shown = data.visible_columns().count();

    let mut tex = String::new();
    tex.push_str(HLINE);
    tex.push_str(&multi_column(shown, 'l', "\\small\\sl continued from previous page"));
    tex.push_str(helper::line_break());
    tex.push_str(HLINE);
    tex.push_str(&header);
    tex.push_str(HLINE);
    tex.push_str("\\endhead\n");

    tex.push_str(HLINE);
    tex.push_str(&header);
    tex.push_str(HLINE);
    tex.push_str("\\endfirsthead\n");

    tex.push_str(HLINE);
    tex.push_str(&multi_column(shown, 'r', "\\small\\sl continued on next page"));
    tex.push_str(helper::line_break());
    tex.push_str(HLINE);
    tex.push_str("\\endfoot\n");

    tex.push_str("\\endlastfoot\n");
    tex
}

fn cell_tex(
    cell: &Cell,
    column: &Column,
    repository: &BuilderRepository,
) -> Result<String, BuildError> {
    Ok(match cell {
        Cell::Empty => String::new(),
        Cell::Number(value) => column.converter().string_to_tex(&format_number(*value)),
        Cell::Text(text) => column.converter().string_to_tex(text),
        Cell::Node(node) => repository.chunk_for(&**node)?,
    })
}

fn rows(data: &DataTable, repository: &BuilderRepository) -> Result<String, BuildError> {
    let mut tex = String::new();
    let count = data.rows().len();
    for (index, row) in data.rows().iter().enumerate() {
        let desirability = if index + 1 == count { BREAK_HIGH } else { BREAK_MEDIUM };
        tex.push_str(&format!("\\pagebreak[{}]", desirability));
        let cells = data
            .visible_columns()
            .map(|(i, column)| cell_tex(&row[i], column, repository))
            .collect::<Result<Vec<_>, _>>()?;
        tex.push_str(&cells.join(VALUE_SEPARATOR));
        tex.push_str(helper::line_break());
        tex.push_str(PHANTOM_LINE);
    }
    tex.push_str(PHANTOM_LINE);
    Ok(tex)
}

fn table_notes(notes: &[&str]) -> String {
    let mut tex = helper::begin(Environment::FlushLeft);
    tex.push_str(&helper::rule("0 pt", &helper::percent_of_text_width(40.0), "0.4 pt"));
    tex.push_str(&helper::begin(Environment::TableNotes));
    for (index, note) in notes.iter().enumerate() {
        tex.push_str(&format!("\\item [{}] {}\n", index + 1, DefaultConverter.string_to_tex(note)));
    }
    tex.push_str(&helper::end(Environment::TableNotes));
    tex.push_str(&helper::end(Environment::FlushLeft));
    tex
}
