//! Table state and the header-activation sort.

use log::{debug, trace};

use crate::error::TableError;

use super::column::{Column, SortDirection};
use super::row::Row;

/// Result of a header activation that sorted the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortChange {
    /// Ordinal index of the activated column.
    pub column: usize,
    /// Direction the column now holds.
    pub direction: SortDirection,
}

/// A table of display rows under a header of columns.
///
/// `Table` owns:
/// - Column definitions, including the per-column sort direction
/// - The rows in display order
///
/// Rows are only ever reordered by [`sort_by`](Table::sort_by). Installing a
/// fresh row set with [`set_rows`](Table::set_rows) replaces them wholesale and
/// resets every column to unsorted.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with column definitions.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a table with initial rows.
    ///
    /// Fails if any row does not have exactly one cell per column.
    pub fn with_rows(columns: Vec<Column>, rows: Vec<Row>) -> Result<Self, TableError> {
        let mut table = Self::new(columns);
        table.set_rows(rows)?;
        Ok(table)
    }

    // -------------------------------------------------------------------------
    // Data access
    // -------------------------------------------------------------------------

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Ordinal index of the first column with the given header.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.header == header)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace all rows.
    ///
    /// The table is rebuilt from scratch: every column direction is cleared.
    pub fn set_rows(&mut self, rows: Vec<Row>) -> Result<(), TableError> {
        let expected = self.columns.len();
        if let Some((row, actual)) = rows
            .iter()
            .map(|r| r.cells().len())
            .enumerate()
            .find(|&(_, n)| n != expected)
        {
            return Err(TableError::CellCount {
                row,
                expected,
                actual,
            });
        }

        self.rows = rows;
        self.clear_sort();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the active sort column and its direction.
    pub fn sort(&self) -> Option<(usize, SortDirection)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(i, c)| c.direction.map(|d| (i, d)))
    }

    /// Clear sort state on every column. Row order is left as is.
    pub fn clear_sort(&mut self) {
        for column in &mut self.columns {
            column.direction = None;
        }
    }

    /// Activate a column header.
    ///
    /// Toggles the column's direction (ascending on first activation or when
    /// switching columns, then alternating), clears every other column, and
    /// stably reorders the rows by the column's trimmed cell text.
    ///
    /// Returns `None` and changes nothing if the index is out of range or the
    /// column is not sortable.
    pub fn sort_by(&mut self, column_index: usize) -> Option<SortChange> {
        let Some(column) = self.columns.get(column_index) else {
            debug!("Ignoring sort on missing column {}", column_index);
            return None;
        };
        if !column.sortable {
            debug!("Ignoring sort on non-sortable column '{}'", column.header);
            return None;
        }

        let direction = SortDirection::next(column.direction);
        let kind = column.kind;

        self.clear_sort();
        self.columns[column_index].direction = Some(direction);

        // Vec::sort_by is stable; equal keys keep their prior order.
        self.rows.sort_by(|a, b| {
            direction.apply(kind.compare(a.key(column_index), b.key(column_index)))
        });

        trace!(
            "Sorted {} rows by column {} ({:?}, {:?})",
            self.rows.len(),
            column_index,
            kind,
            direction
        );

        Some(SortChange {
            column: column_index,
            direction,
        })
    }

    /// Activate a column header by its label.
    pub fn sort_by_header(&mut self, header: &str) -> Option<SortChange> {
        let index = self.column_index(header)?;
        self.sort_by(index)
    }
}
