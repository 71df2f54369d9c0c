//! Typed record shapes for the analytics endpoints.
//!
//! Every payload is deserialized into one of these types and then checked
//! with [`Validate`] before anything else sees it.

mod correlation;
mod country;
mod trends;
mod tunisia;

pub use correlation::*;
pub use country::*;
pub use trends::*;
pub use tunisia::*;

use serde::Deserialize;
use serde::Serialize;

use crate::error::{FieldValidationError, ValidationError};

/// Boundary validation for decoded payloads.
pub trait Validate {
    /// Check every field, reporting all failures at once.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        let errors: Vec<FieldValidationError> = self
            .iter()
            .enumerate()
            .filter_map(|(i, item)| item.validate().err().map(|e| (i, e)))
            .flat_map(|(i, e)| {
                let prefix = format!("[{}]", i);
                e.errors
                    .into_iter()
                    .map(move |f| f.prefixed(&prefix))
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}

/// Body returned by the backend alongside non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// Collects field failures while a payload is checked.
#[derive(Debug, Default)]
pub(crate) struct Checks {
    errors: Vec<FieldValidationError>,
}

impl Checks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn require(&mut self, ok: bool, field: &str, message: impl Into<String>) {
        if !ok {
            self.errors.push(FieldValidationError::new(field, message));
        }
    }

    pub(crate) fn non_empty(&mut self, field: &str, value: &str) {
        self.require(!value.trim().is_empty(), field, "must not be empty");
    }

    pub(crate) fn in_range(&mut self, field: &str, value: f64, min: f64, max: f64) {
        self.require(
            (min..=max).contains(&value),
            field,
            format!("{} is outside [{}, {}]", value, min, max),
        );
    }

    /// A chart series must have one value per year.
    pub(crate) fn series<T>(&mut self, field: &str, series: &[T], years: usize) {
        self.require(
            series.len() == years,
            field,
            format!("expected {} values, got {}", years, series.len()),
        );
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.errors))
        }
    }
}
