//! Plain-text table rendering.

use unicode_width::UnicodeWidthStr;

use super::column::{Alignment, Column};
use super::state::Table;

const COLUMN_GAP: &str = "  ";

/// Header text with the sort indicator of the active column.
///
/// The indicator goes on the side away from the content so the label does
/// not shift: after left/centered labels, before right-aligned ones.
pub fn header_label(column: &Column) -> String {
    match column.direction() {
        Some(direction) => match column.align {
            Alignment::Right => format!("{} {}", direction.indicator(), column.header),
            Alignment::Left | Alignment::Center => {
                format!("{} {}", column.header, direction.indicator())
            }
        },
        None => column.header.clone(),
    }
}

/// Render a table as fixed-width text: header, separator, one line per row.
pub fn render(table: &Table) -> String {
    let headers: Vec<String> = table.columns().iter().map(header_label).collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            table
                .rows()
                .iter()
                .filter_map(|row| row.cell(i))
                .map(|cell| cell.text().width())
                .fold(header.width(), usize::max)
        })
        .collect();

    let mut out = String::new();

    let header_cells = table
        .columns()
        .iter()
        .zip(&headers)
        .zip(&widths)
        .map(|((column, header), &width)| pad(header, width, column.align));
    push_line(&mut out, header_cells);

    let rule = widths.iter().map(|&w| "─".repeat(w));
    push_line(&mut out, rule);

    for row in table.rows() {
        let cells = table
            .columns()
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (column, &width))| {
                let text = row.cell(i).map(|c| c.text()).unwrap_or("");
                pad(text, width, column.align)
            });
        push_line(&mut out, cells);
    }

    out
}

fn push_line(out: &mut String, cells: impl Iterator<Item = String>) {
    let line = cells.collect::<Vec<_>>().join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Pad by display width; `format!` width counts chars, not columns.
fn pad(text: &str, width: usize, align: Alignment) -> String {
    let fill = width.saturating_sub(text.width());
    match align {
        Alignment::Left => format!("{}{}", text, " ".repeat(fill)),
        Alignment::Right => format!("{}{}", " ".repeat(fill), text),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
        }
    }
}
