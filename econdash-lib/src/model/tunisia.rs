//! Per-governorate series for the Tunisia dashboard.

use serde::Deserialize;
use serde::Serialize;

use crate::error::ValidationError;

use super::{Checks, Validate};

/// Real estate prices by year (`real-estate-trends/<id>/`).
///
/// Series are parallel to `years`; a missing value is `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RealEstateTrends {
    #[serde(default)]
    pub governorate_name: Option<String>,
    #[serde(default)]
    pub years: Vec<i32>,
    #[serde(default)]
    pub residential_prices: Vec<Option<f64>>,
    #[serde(default)]
    pub commercial_prices: Vec<Option<f64>>,
    #[serde(default)]
    pub land_prices: Vec<Option<f64>>,
}

impl Validate for RealEstateTrends {
    fn validate(&self) -> Result<(), ValidationError> {
        let years = self.years.len();
        let mut checks = Checks::new();
        checks.series("residential_prices", &self.residential_prices, years);
        checks.series("commercial_prices", &self.commercial_prices, years);
        checks.series("land_prices", &self.land_prices, years);
        checks.finish()
    }
}

/// Labor market indicators by year (`labor-market-trends/<id>/`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LaborMarketTrends {
    #[serde(default)]
    pub governorate_name: Option<String>,
    #[serde(default)]
    pub years: Vec<i32>,
    #[serde(default)]
    pub unemployment_rate: Vec<Option<f64>>,
    #[serde(default)]
    pub youth_unemployment: Vec<Option<f64>>,
    #[serde(default)]
    pub female_unemployment: Vec<Option<f64>>,
    #[serde(default)]
    pub labor_force_participation: Vec<Option<f64>>,
    /// Average wage in TND.
    #[serde(default)]
    pub average_wage: Vec<Option<f64>>,
    #[serde(default)]
    pub job_creation_rate: Vec<Option<f64>>,
}

impl Validate for LaborMarketTrends {
    fn validate(&self) -> Result<(), ValidationError> {
        let years = self.years.len();
        let mut checks = Checks::new();
        checks.series("unemployment_rate", &self.unemployment_rate, years);
        checks.series("youth_unemployment", &self.youth_unemployment, years);
        checks.series("female_unemployment", &self.female_unemployment, years);
        checks.series(
            "labor_force_participation",
            &self.labor_force_participation,
            years,
        );
        checks.series("average_wage", &self.average_wage, years);
        checks.series("job_creation_rate", &self.job_creation_rate, years);
        checks.finish()
    }
}

/// A Tunisian governorate as listed by the `governorates/` router.
///
/// Only the fields the dashboard needs are decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Governorate {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub arabic_name: Option<String>,
}

impl Validate for Governorate {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new();
        checks.non_empty("name", &self.name);
        checks.finish()
    }
}

/// Governorate preselected in the charts: Tunis when listed, else the first.
pub fn default_governorate(governorates: &[Governorate]) -> Option<&Governorate> {
    governorates
        .iter()
        .find(|g| g.name.trim().eq_ignore_ascii_case("tunis"))
        .or_else(|| governorates.first())
}
