//! Global inflation trends.

use serde::Deserialize;
use serde::Serialize;

use crate::error::ValidationError;
use crate::format::{format_optional, format_percentage};
use crate::table::{Column, TableRecord};

use super::{Checks, Validate};

/// Average inflation across the filtered countries for one year
/// (`inflation-trends/`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InflationTrend {
    pub year: i32,
    #[serde(default)]
    pub avg_headline_inflation: Option<f64>,
    #[serde(default)]
    pub avg_food_inflation: Option<f64>,
    #[serde(default)]
    pub avg_energy_inflation: Option<f64>,
    #[serde(default)]
    pub avg_core_inflation: Option<f64>,
}

impl Validate for InflationTrend {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new();
        checks.require(self.year > 0, "year", "must be positive");
        checks.finish()
    }
}

impl TableRecord for InflationTrend {
    fn columns() -> Vec<Column> {
        ["Year", "Headline", "Food", "Energy", "Core"]
            .into_iter()
            .map(|header| Column::new(header).sortable().numeric())
            .collect()
    }

    fn id(&self) -> String {
        self.year.to_string()
    }

    fn cells(&self) -> Vec<String> {
        let percent = |v: Option<f64>| format_optional(v, |v| format_percentage(v, 2));
        vec![
            self.year.to_string(),
            percent(self.avg_headline_inflation),
            percent(self.avg_food_inflation),
            percent(self.avg_energy_inflation),
            percent(self.avg_core_inflation),
        ]
    }
}

/// Query filters for the inflation trends endpoint.
///
/// # Example
///
/// ```
/// use econdash_lib::model::InflationFilter;
///
/// let filter = InflationFilter::new()
///     .continent("Africa")
///     .years(2015, 2022);
/// assert_eq!(filter.query_pairs().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InflationFilter {
    pub continent: Option<String>,
    /// Country name or ISO code.
    pub country: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

impl InflationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn continent(mut self, continent: impl Into<String>) -> Self {
        self.continent = Some(continent.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Restrict to an inclusive year range.
    pub fn years(mut self, start: i32, end: i32) -> Self {
        self.start_year = Some(start);
        self.end_year = Some(end);
        self
    }

    /// Query string pairs for the set filters, in a fixed order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(continent) = &self.continent {
            pairs.push(("continent", continent.clone()));
        }
        if let Some(country) = &self.country {
            pairs.push(("country", country.clone()));
        }
        if let Some(start) = self.start_year {
            pairs.push(("start_year", start.to_string()));
        }
        if let Some(end) = self.end_year {
            pairs.push(("end_year", end.to_string()));
        }
        pairs
    }
}

impl Validate for InflationFilter {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new();
        if let (Some(start), Some(end)) = (self.start_year, self.end_year) {
            checks.require(
                start <= end,
                "start_year",
                format!("{} is after end_year {}", start, end),
            );
        }
        checks.finish()
    }
}
