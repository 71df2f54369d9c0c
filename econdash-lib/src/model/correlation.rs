//! Indicator correlation and PCA results.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ValidationError;

use super::{Checks, Validate};

/// Pairwise correlation between indicators.
///
/// `matrix[i][j]` is the correlation of `headers[i]` with `headers[j]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub headers: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Validate for CorrelationMatrix {
    fn validate(&self) -> Result<(), ValidationError> {
        let size = self.headers.len();
        let mut checks = Checks::new();
        checks.series("matrix", &self.matrix, size);
        for (i, row) in self.matrix.iter().enumerate() {
            checks.series(&format!("matrix[{}]", i), row, size);
            for (j, value) in row.iter().enumerate() {
                checks.in_range(&format!("matrix[{}][{}]", i, j), *value, -1.0, 1.0);
            }
        }
        checks.finish()
    }
}

/// Payload of `correlation-analysis/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CorrelationAnalysis {
    #[serde(default)]
    pub static_correlation_matrix: CorrelationMatrix,
    #[serde(default)]
    pub pca_insights: Vec<String>,
    /// Loadings per principal component, e.g. `PC1 -> gdp_per_capita -> 0.85`.
    #[serde(default)]
    pub pca_loadings: BTreeMap<String, BTreeMap<String, f64>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl CorrelationAnalysis {
    /// Loadings of one component, if present.
    pub fn component(&self, name: &str) -> Option<&BTreeMap<String, f64>> {
        self.pca_loadings.get(name)
    }
}

impl Validate for CorrelationAnalysis {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.static_correlation_matrix.validate() {
            Ok(()) => Ok(()),
            Err(e) => Err(ValidationError::new(
                e.errors
                    .into_iter()
                    .map(|f| f.prefixed("static_correlation_matrix"))
                    .collect(),
            )),
        }
    }
}
