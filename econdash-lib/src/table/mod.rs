//! Sortable tables.
//!
//! A [`Table`] holds typed [`Column`]s and display [`Row`]s. Activating a
//! sortable column header with [`Table::sort_by`] toggles its direction and
//! stably reorders the rows, comparing cells either numerically or with a
//! locale-style string collation depending on the column type.
//!
//! # Example
//!
//! ```
//! use econdash_lib::table::{Column, Row, SortDirection, Table};
//!
//! let mut table = Table::with_rows(
//!     vec![Column::new("Country").sortable(), Column::new("GDP").sortable().numeric()],
//!     vec![
//!         Row::new("tn", ["Tunisia", "$3,800"]),
//!         Row::new("ma", ["Morocco", "$3,500"]),
//!     ],
//! )
//! .unwrap();
//!
//! let change = table.sort_by(1).unwrap();
//! assert_eq!(change.direction, SortDirection::Ascending);
//! assert_eq!(table.rows()[0].id(), "ma");
//! ```

mod column;
mod compare;
mod render;
mod row;
mod source;
mod state;
mod view;

pub use column::{Alignment, Column, ColumnType, SortDirection};
pub use compare::{collate, compare_numeric, extract_number};
pub use render::{header_label, render};
pub use row::{Cell, Row};
pub use source::TableRecord;
pub use state::{SortChange, Table};
pub use view::{Subscription, TableView};
