//! Building tables from typed records.

use super::column::Column;
use super::row::Row;
use super::state::Table;

/// Trait for records that can be displayed as rows in a [`Table`].
///
/// # Examples
///
/// ```
/// use econdash_lib::table::{Column, Table, TableRecord};
///
/// struct Region {
///     name: String,
///     score: f64,
/// }
///
/// impl TableRecord for Region {
///     fn columns() -> Vec<Column> {
///         vec![Column::new("Region").sortable(), Column::new("Score").sortable().numeric()]
///     }
///     fn id(&self) -> String { self.name.clone() }
///     fn cells(&self) -> Vec<String> {
///         vec![self.name.clone(), format!("{:.1}", self.score)]
///     }
/// }
///
/// let table = Table::from_records(&[Region { name: "Sfax".into(), score: 6.1 }]);
/// assert_eq!(table.len(), 1);
/// ```
pub trait TableRecord {
    /// Column definitions shared by every record of this type.
    fn columns() -> Vec<Column>;

    /// Unique identifier for this record.
    fn id(&self) -> String;

    /// Display text for each column, in column order.
    ///
    /// Must return exactly one entry per column.
    fn cells(&self) -> Vec<String>;
}

impl Table {
    /// Build an unsorted table from records.
    ///
    /// Rows whose cell count does not match the columns are padded with empty
    /// cells or truncated, so a table is always produced.
    pub fn from_records<T: TableRecord>(records: &[T]) -> Table {
        let columns = T::columns();
        let width = columns.len();
        let rows = records
            .iter()
            .map(|record| {
                let mut cells = record.cells();
                if cells.len() != width {
                    log::warn!(
                        "Record {} produced {} cells for {} columns",
                        record.id(),
                        cells.len(),
                        width
                    );
                    cells.resize(width, String::new());
                }
                Row::new(record.id(), cells)
            })
            .collect::<Vec<_>>();

        let mut table = Table::new(columns);
        // Widths were normalized above.
        let _ = table.set_rows(rows);
        table
    }
}
