//! Economic dashboard client library
//!
//! Typed access to the analytics JSON endpoints plus the pieces a dashboard
//! view is built from: sortable tables, chart series and a debounced
//! country search.

pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod search;
pub mod table;

mod client;

pub use client::*;
pub use config::DashboardConfig;
pub use error::Error;
