//! Country-level records.

use serde::Deserialize;
use serde::Serialize;

use crate::error::ValidationError;
use crate::format::{format_number, format_optional, format_percentage};
use crate::table::{Alignment, Column, TableRecord};

use super::{Checks, Validate};

/// One marker on the world happiness map (`global-dashboard-data/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    /// Country name.
    pub country: String,
    /// Latest happiness score.
    pub happiness: f64,
    pub lat: f64,
    pub lng: f64,
    /// ISO country code.
    pub code: String,
}

impl Validate for MapPoint {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new();
        checks.non_empty("country", &self.country);
        checks.non_empty("code", &self.code);
        checks.in_range("lat", self.lat, -90.0, 90.0);
        checks.in_range("lng", self.lng, -180.0, 180.0);
        checks.finish()
    }
}

impl TableRecord for MapPoint {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Country").sortable(),
            Column::new("Code").sortable().align(Alignment::Center),
            Column::new("Happiness").sortable().numeric(),
            Column::new("Latitude").sortable().numeric(),
            Column::new("Longitude").sortable().numeric(),
        ]
    }

    fn id(&self) -> String {
        self.code.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.country.clone(),
            self.code.clone(),
            format_number(self.happiness, 2),
            format_number(self.lat, 4),
            format_number(self.lng, 4),
        ]
    }
}

/// A country search hit (`search-countries/?q=`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// Happiness score for the latest year with data, if any.
    #[serde(default)]
    pub happiness_score: Option<f64>,
}

impl CountrySummary {
    /// Secondary line shown under the name: `Continent - Region`.
    pub fn location(&self) -> String {
        match (self.continent.as_deref(), self.region.as_deref()) {
            (Some(c), Some(r)) => format!("{} - {}", c, r),
            (Some(c), None) => c.to_string(),
            (None, Some(r)) => format!(" - {}", r),
            (None, None) => String::new(),
        }
    }
}

impl Validate for CountrySummary {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new();
        checks.non_empty("name", &self.name);
        checks.non_empty("code", &self.code);
        checks.finish()
    }
}

impl TableRecord for CountrySummary {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Name").sortable(),
            Column::new("Code").sortable().align(Alignment::Center),
            Column::new("Continent").sortable(),
            Column::new("Region").sortable(),
            Column::new("Happiness").sortable().numeric(),
        ]
    }

    fn id(&self) -> String {
        self.code.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.code.clone(),
            self.continent.clone().unwrap_or_default(),
            self.region.clone().unwrap_or_default(),
            format_optional(self.happiness_score, |v| format_number(v, 2)),
        ]
    }
}

/// Static facts about a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryInfo {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Validate for CountryInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new();
        checks.non_empty("name", &self.name);
        if let Some(lat) = self.latitude {
            checks.in_range("latitude", lat, -90.0, 90.0);
        }
        if let Some(lng) = self.longitude {
            checks.in_range("longitude", lng, -180.0, 180.0);
        }
        checks.finish()
    }
}

/// One year of indicators for a country.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EconomicIndicator {
    pub year: i32,
    #[serde(default)]
    pub headline_consumer_price_inflation: Option<f64>,
    #[serde(default)]
    pub energy_consumer_price_inflation: Option<f64>,
    #[serde(default)]
    pub food_consumer_price_inflation: Option<f64>,
    #[serde(default)]
    pub official_core_consumer_price_inflation: Option<f64>,
    #[serde(default)]
    pub producer_price_inflation: Option<f64>,
    #[serde(default)]
    pub gdp_deflator_index_growth_rate: Option<f64>,
    #[serde(default)]
    pub happiness_score: Option<f64>,
    #[serde(default)]
    pub gdp_per_capita: Option<f64>,
    #[serde(default)]
    pub social_support: Option<f64>,
    #[serde(default)]
    pub healthy_life_expectancy_at_birth: Option<f64>,
    #[serde(default)]
    pub freedom_to_make_life_choices: Option<f64>,
    #[serde(default)]
    pub generosity: Option<f64>,
    #[serde(default)]
    pub perceptions_of_corruption: Option<f64>,
}

impl Validate for EconomicIndicator {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new();
        checks.require(self.year > 0, "year", "must be positive");
        checks.finish()
    }
}

impl TableRecord for EconomicIndicator {
    fn columns() -> Vec<Column> {
        [
            "Year",
            "Headline Inflation",
            "Energy Inflation",
            "Food Inflation",
            "Core Inflation",
            "Producer Inflation",
            "GDP Deflator",
            "Happiness",
            "GDP per Capita",
            "Social Support",
            "Life Expectancy",
            "Freedom",
            "Generosity",
            "Corruption",
        ]
        .into_iter()
        .map(|header| Column::new(header).sortable().numeric())
        .collect()
    }

    fn id(&self) -> String {
        self.year.to_string()
    }

    fn cells(&self) -> Vec<String> {
        let percent = |v: Option<f64>| format_optional(v, |v| format_percentage(v, 2));
        let score = |v: Option<f64>| format_optional(v, |v| format_number(v, 3));
        vec![
            self.year.to_string(),
            percent(self.headline_consumer_price_inflation),
            percent(self.energy_consumer_price_inflation),
            percent(self.food_consumer_price_inflation),
            percent(self.official_core_consumer_price_inflation),
            percent(self.producer_price_inflation),
            percent(self.gdp_deflator_index_growth_rate),
            score(self.happiness_score),
            score(self.gdp_per_capita),
            score(self.social_support),
            score(self.healthy_life_expectancy_at_birth),
            score(self.freedom_to_make_life_choices),
            score(self.generosity),
            score(self.perceptions_of_corruption),
        ]
    }
}

/// Country page payload (`country-detail/<name>/`).
///
/// When the backend has no indicators it still returns the country info,
/// with `error` set and the indicator list absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryDetail {
    pub country_info: CountryInfo,
    #[serde(default)]
    pub economic_indicators: Vec<EconomicIndicator>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Validate for CountryDetail {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if let Err(e) = self.country_info.validate() {
            errors.extend(e.errors.into_iter().map(|f| f.prefixed("country_info")));
        }
        if let Err(e) = self.economic_indicators.validate() {
            errors.extend(
                e.errors
                    .into_iter()
                    .map(|f| f.prefixed("economic_indicators")),
            );
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}
