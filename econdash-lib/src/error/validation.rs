//! Validation error types

/// Error information for a specific field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    /// The field that failed validation, e.g. `lat` or `[3].code`.
    pub field: String,
    /// Human-readable validation error message.
    pub message: String,
}

impl FieldValidationError {
    /// Creates a new field validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the same error with `prefix` prepended to the field path.
    ///
    /// Index segments attach without a dot: `items` + `[2].code` gives
    /// `items[2].code`.
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.field = if self.field.starts_with('[') {
            format!("{}{}", prefix, self.field)
        } else {
            format!("{}.{}", prefix, self.field)
        };
        self
    }
}

impl std::fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A payload failed boundary validation.
///
/// Carries every failing field rather than stopping at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {}", summarize(.errors))]
pub struct ValidationError {
    /// Every field that failed.
    pub errors: Vec<FieldValidationError>,
}

impl ValidationError {
    /// Creates a validation error from collected field errors.
    pub fn new(errors: Vec<FieldValidationError>) -> Self {
        Self { errors }
    }

    /// Returns `true` if `field` is among the failing fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

fn summarize(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
