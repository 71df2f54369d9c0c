//! Chart series models.
//!
//! [`ChartData`] is the renderer-agnostic shape of a chart: one label per
//! category (a year, or an indicator for the PCA bars) and one [`Dataset`]
//! per plotted series. Charts are kept in a
//! [`ChartRegistry`] owned by whichever view displays them.

mod registry;

pub use registry::{ChartEntry, ChartId, ChartRegistry};

use crate::format::{format_number, format_optional};
use crate::model::{CorrelationAnalysis, InflationTrend, LaborMarketTrends, RealEstateTrends};
use crate::table::{Column, Row, Table, extract_number};

/// Title shown when a fetch for a chart failed.
pub const ERROR_TITLE: &str = "Error Loading Data";

/// Title shown before a governorate has been picked.
pub const SELECT_TITLE: &str = "Select a Governorate";

/// Title shown when the correlation payload has no PCA loadings.
pub const PCA_UNAVAILABLE_TITLE: &str = "Correlation data (PCA) not available.";

/// Title shown when PCA loadings exist but PC1 is missing or empty.
pub const PC1_UNAVAILABLE_TITLE: &str = "PCA PC1 loadings not available.";

/// How a chart is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    /// Bars along the x axis with categories on the y axis.
    HorizontalBar,
}

/// Which y axis a dataset is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Primary,
    Secondary,
}

/// One plotted series.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    /// One value per label; `None` leaves a gap.
    pub data: Vec<Option<f64>>,
    pub axis: Axis,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            data,
            axis: Axis::Primary,
        }
    }

    pub fn on_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }
}

/// Data for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub kind: ChartKind,
    /// Name of the category axis, used as the first column by [`to_table`](Self::to_table).
    pub category: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    /// Decimals shown when the values are tabulated.
    pub decimals: usize,
}

impl ChartData {
    /// Create a line chart over years.
    pub fn new(title: impl Into<String>, labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self {
            title: title.into(),
            kind: ChartKind::Line,
            category: "Year".to_string(),
            labels,
            datasets,
            decimals: 2,
        }
    }

    pub fn with_kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// `true` when there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Drop every value and label, keeping the dataset definitions.
    pub fn cleared(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self.labels.clear();
        for dataset in &mut self.datasets {
            dataset.data.clear();
        }
        self
    }

    /// Real estate price chart for one governorate.
    pub fn real_estate(trends: &RealEstateTrends) -> Self {
        let datasets = vec![
            Dataset::new("Residential Price (€/m²)", trends.residential_prices.clone()),
            Dataset::new("Commercial Price (€/m²)", trends.commercial_prices.clone()),
            Dataset::new("Land Price (€/m²)", trends.land_prices.clone()),
        ];
        let title = titled(
            "Real Estate Price Trends",
            trends.governorate_name.as_deref(),
            &trends.years,
        );
        Self::new(title, year_labels(&trends.years), datasets)
    }

    /// Labor market chart for one governorate. Wages use the secondary axis.
    pub fn labor_market(trends: &LaborMarketTrends) -> Self {
        let datasets = vec![
            Dataset::new("Unemployment Rate (%)", trends.unemployment_rate.clone()),
            Dataset::new("Youth Unemployment (%)", trends.youth_unemployment.clone()),
            Dataset::new("Female Unemployment (%)", trends.female_unemployment.clone()),
            Dataset::new(
                "Labor Force Participation (%)",
                trends.labor_force_participation.clone(),
            ),
            Dataset::new("Average Wage (TND)", trends.average_wage.clone()).on_axis(Axis::Secondary),
            Dataset::new("Job Creation Rate (%)", trends.job_creation_rate.clone()),
        ];
        let title = titled(
            "Labor Market Trends",
            trends.governorate_name.as_deref(),
            &trends.years,
        );
        Self::new(title, year_labels(&trends.years), datasets)
    }

    /// Global average inflation by year.
    pub fn inflation(trends: &[InflationTrend]) -> Self {
        let series = |f: fn(&InflationTrend) -> Option<f64>| -> Vec<Option<f64>> {
            trends.iter().map(f).collect()
        };
        let datasets = vec![
            Dataset::new("Headline Inflation", series(|t| t.avg_headline_inflation)),
            Dataset::new("Food Inflation", series(|t| t.avg_food_inflation)),
            Dataset::new("Energy Inflation", series(|t| t.avg_energy_inflation)),
            Dataset::new("Core Inflation", series(|t| t.avg_core_inflation)),
        ];
        let years: Vec<i32> = trends.iter().map(|t| t.year).collect();
        let title = if years.is_empty() {
            "No inflation data available.".to_string()
        } else {
            "Global Inflation Trends".to_string()
        };
        Self::new(title, year_labels(&years), datasets)
    }

    /// Horizontal bars of the PC1 loadings, one per indicator.
    ///
    /// Indicators are in name order. Without loadings the chart is empty and
    /// titled with the matching placeholder.
    pub fn pca_loadings(analysis: &CorrelationAnalysis) -> Self {
        let loadings = analysis.component("PC1").filter(|pc1| !pc1.is_empty());
        let title = match loadings {
            Some(_) => "Factor Loadings on Principal Component 1 (PC1)",
            None if analysis.pca_loadings.is_empty() => PCA_UNAVAILABLE_TITLE,
            None => PC1_UNAVAILABLE_TITLE,
        };
        let (labels, values): (Vec<String>, Vec<Option<f64>>) = loadings
            .map(|pc1| {
                pc1.iter()
                    .map(|(name, value)| (name.clone(), Some(*value)))
                    .unzip()
            })
            .unwrap_or_default();

        Self::new(title, labels, vec![Dataset::new("PC1 Loadings", values)])
            .with_kind(ChartKind::HorizontalBar)
            .with_category("Economic Indicator")
            .with_decimals(3)
    }

    /// Tabulate the series: a category column plus one numeric column per
    /// dataset.
    ///
    /// The category column sorts numerically when every label is a number.
    pub fn to_table(&self) -> Table {
        let category = Column::new(self.category.clone()).sortable();
        let category = if self.labels.iter().all(|l| !extract_number(l).is_nan()) {
            category.numeric()
        } else {
            category
        };
        let mut columns = vec![category];
        columns.extend(
            self.datasets
                .iter()
                .map(|d| Column::new(d.label.clone()).sortable().numeric()),
        );

        let rows = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let values = self.datasets.iter().map(|d| {
                    format_optional(d.data.get(i).copied().flatten(), |v| {
                        format_number(v, self.decimals)
                    })
                });
                Row::new(label.clone(), std::iter::once(label.clone()).chain(values))
            })
            .collect();

        let mut table = Table::new(columns);
        // One cell per column by construction.
        let _ = table.set_rows(rows);
        table
    }
}

fn year_labels(years: &[i32]) -> Vec<String> {
    years.iter().map(i32::to_string).collect()
}

fn titled(base: &str, governorate: Option<&str>, years: &[i32]) -> String {
    if years.is_empty() {
        return format!("No data for {}", governorate.unwrap_or("selected area"));
    }
    match governorate {
        Some(name) => format!("{} in {}", base, name),
        None => base.to_string(),
    }
}
