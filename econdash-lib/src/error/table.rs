//! Table construction errors

/// Errors raised when rows are installed into a table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A row does not have exactly one cell per column.
    #[error("row {row} has {actual} cells, expected {expected}")]
    CellCount {
        /// Position of the offending row in the supplied sequence.
        row: usize,
        /// Number of columns in the table.
        expected: usize,
        /// Number of cells in the row.
        actual: usize,
    },
}
