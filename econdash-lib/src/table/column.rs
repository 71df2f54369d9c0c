//! Column definitions and sort direction.

use std::cmp::Ordering;

use super::compare;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Declared data type of a column, selecting its comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnType {
    /// Locale-style string ordering.
    #[default]
    Text,
    /// Numbers extracted from formatted display text (`$1,200`, `12.5%`).
    Numeric,
}

impl ColumnType {
    /// Compare two trimmed display strings in ascending order.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Text => compare::collate(a, b),
            Self::Numeric => compare::compare_numeric(a, b),
        }
    }
}

/// Sort direction of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first (A-Z, 0-9).
    Ascending,
    /// Largest first (Z-A, 9-0).
    Descending,
}

impl SortDirection {
    /// Direction produced by activating a column whose current direction is `current`.
    ///
    /// Only an ascending column flips to descending; unset and descending
    /// columns both go to ascending.
    pub fn next(current: Option<SortDirection>) -> SortDirection {
        match current {
            Some(SortDirection::Ascending) => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Header indicator glyph.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Column configuration.
///
/// Columns define the header label, whether clicking the header sorts the
/// table, and how cell text is compared when it does.
///
/// # Examples
///
/// ```
/// use econdash_lib::table::Column;
///
/// let columns = vec![
///     Column::new("Country").sortable(),
///     Column::new("Score").sortable().numeric(),
///     Column::new("Notes"),
/// ];
/// assert!(columns[1].sortable);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column header text
    pub header: String,
    /// Whether activating this column sorts the table
    pub sortable: bool,
    /// Declared data type
    pub kind: ColumnType,
    /// Horizontal alignment
    pub align: Alignment,
    pub(super) direction: Option<SortDirection>,
}

impl Column {
    /// Create a new, non-sortable text column.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sortable: false,
            kind: ColumnType::Text,
            align: Alignment::Left,
            direction: None,
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Declare the column numeric. Numeric columns are right-aligned.
    pub fn numeric(mut self) -> Self {
        self.kind = ColumnType::Numeric;
        self.align = Alignment::Right;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Current sort direction, `None` when the column is not the active one.
    pub fn direction(&self) -> Option<SortDirection> {
        self.direction
    }
}
