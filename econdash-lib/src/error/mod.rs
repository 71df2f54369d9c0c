//! Error types

mod api;
mod config;
mod table;
mod validation;

pub use api::*;
pub use config::*;
pub use table::*;
pub use validation::*;

/// Top-level error for every fallible operation in the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fetching or decoding an endpoint failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A decoded payload did not pass boundary validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Rows could not be installed into a table.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
