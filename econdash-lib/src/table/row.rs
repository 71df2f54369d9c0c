//! Rows and cells.

/// One displayed cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell(String);

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Display text exactly as rendered.
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Display text with surrounding whitespace removed; this is the sort key.
    pub fn key(&self) -> &str {
        self.0.trim()
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// One record of displayed data, one cell per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    id: String,
    cells: Vec<Cell>,
}

impl Row {
    /// Create a row from an identity and its cell texts.
    pub fn new<I, C>(id: impl Into<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Self {
            id: id.into(),
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Stable identity of the row.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, column_index: usize) -> Option<&Cell> {
        self.cells.get(column_index)
    }

    /// Sort key for a column, empty when the column is out of range.
    pub(super) fn key(&self, column_index: usize) -> &str {
        self.cell(column_index).map(Cell::key).unwrap_or("")
    }
}
