use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use econdash_lib::chart::{ChartData, ChartId, ChartRegistry};
use econdash_lib::error::Error as LibError;
use econdash_lib::format::{MISSING, format_number, format_optional};
use econdash_lib::model::{
    CountryDetail, CountrySummary, InflationFilter, InflationTrend, MapPoint, Validate,
    default_governorate,
};
use econdash_lib::search::rank_results;
use econdash_lib::table::{Table, TableRecord, render};
use econdash_lib::{DashboardClient, DashboardConfig};
use log::{info, warn};
use serde::de::DeserializeOwned;

use crate::args::{Commands, RecordKind, SortArgs};

pub async fn run(command: Commands, config: &DashboardConfig) -> Result<()> {
    let client = || DashboardClient::from_config(config);
    match command {
        Commands::Table { file, kind, sort } => {
            let table = load_table(&file, kind)?;
            print_table(table, &sort);
        }
        Commands::Map { sort } => {
            let points = client()?.global_dashboard_data().await?;
            print_records(&points, &sort, "No map data available.");
        }
        Commands::Search { query, sort } => {
            let hits = client()?.search_countries(&query).await?;
            let hits = rank_results(&query, hits);
            print_records(&hits, &sort, "No countries found.");
        }
        Commands::Detail { country, sort } => {
            let detail = match client()?.country_detail(&country).await {
                Ok(detail) => detail,
                Err(LibError::Api(e)) if e.is_not_found() => {
                    bail!("No country named {:?}", country)
                }
                Err(e) => return Err(e.into()),
            };
            print_detail(&detail, &sort);
        }
        Commands::Inflation {
            continent,
            country,
            start_year,
            end_year,
            sort,
        } => {
            let filter = InflationFilter {
                continent,
                country,
                start_year,
                end_year,
            };
            let trends = client()?.inflation_trends(&filter).await?;
            let chart = ChartData::inflation(&trends);
            println!("{}", chart.title);
            print_records(&trends, &sort, "");
        }
        Commands::Correlation { sort } => {
            let (result, insights) = match client()?.correlation_analysis().await {
                Ok(analysis) => (Ok(ChartData::pca_loadings(&analysis)), analysis.pca_insights),
                Err(e) => (Err(e), Vec::new()),
            };
            let template = ChartData::pca_loadings(&Default::default());
            let mut charts = ChartRegistry::new();
            show_chart(&mut charts, "correlation", result, template, &sort)?;
            for insight in &insights {
                println!("- {}", insight);
            }
        }
        Commands::RealEstate {
            governorate_id,
            sort,
        } => {
            let client = client()?;
            let id = resolve_governorate(&client, governorate_id).await?;
            let result = client
                .real_estate_trends(id)
                .await
                .map(|trends| ChartData::real_estate(&trends));
            let template = ChartData::real_estate(&Default::default());
            let mut charts = ChartRegistry::new();
            show_chart(&mut charts, "real-estate", result, template, &sort)?;
        }
        Commands::Labor {
            governorate_id,
            sort,
        } => {
            let client = client()?;
            let id = resolve_governorate(&client, governorate_id).await?;
            let result = client
                .labor_market_trends(id)
                .await
                .map(|trends| ChartData::labor_market(&trends));
            let template = ChartData::labor_market(&Default::default());
            let mut charts = ChartRegistry::new();
            show_chart(&mut charts, "labor-market", result, template, &sort)?;
        }
    }
    Ok(())
}

/// The requested governorate, or Tunis (else the first listed) when none was given.
async fn resolve_governorate(client: &DashboardClient, requested: Option<u32>) -> Result<u32> {
    if let Some(id) = requested {
        return Ok(id);
    }
    let governorates = client.governorates().await?;
    let Some(governorate) = default_governorate(&governorates) else {
        bail!("No governorates found");
    };
    info!("Defaulting to governorate {} ({})", governorate.name, governorate.id);
    Ok(governorate.id)
}

/// Decode a saved endpoint response and tabulate it.
fn load_table(path: &Path, kind: RecordKind) -> Result<Table> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    info!("Loaded {} bytes from {}", raw.len(), path.display());

    let table = match kind {
        RecordKind::Countries => Table::from_records(&decode::<Vec<CountrySummary>>(&raw)?),
        RecordKind::Indicators => {
            Table::from_records(&decode::<CountryDetail>(&raw)?.economic_indicators)
        }
        RecordKind::Inflation => Table::from_records(&decode::<Vec<InflationTrend>>(&raw)?),
        RecordKind::Map => Table::from_records(&decode::<Vec<MapPoint>>(&raw)?),
    };
    Ok(table)
}

fn decode<T: DeserializeOwned + Validate>(raw: &str) -> Result<T> {
    let value: T = serde_json::from_str(raw).context("Invalid JSON for the selected kind")?;
    value.validate()?;
    Ok(value)
}

fn print_records<T: TableRecord>(records: &[T], sort: &SortArgs, empty: &str) {
    if records.is_empty() && !empty.is_empty() {
        println!("{}", empty);
        return;
    }
    print_table(Table::from_records(records), sort);
}

/// Apply each `--sort` as one header activation, then print.
fn print_table(mut table: Table, sort: &SortArgs) {
    for header in &sort.columns {
        if table.sort_by_header(header).is_none() {
            warn!("Ignoring sort on {:?}", header);
            eprintln!("warning: {:?} is not a sortable column", header);
        }
    }
    println!("{}", render(&table));
}

fn print_detail(detail: &CountryDetail, sort: &SortArgs) {
    let info = &detail.country_info;
    println!("{} ({})", info.name, info.code);
    println!(
        "Continent: {}",
        info.continent.as_deref().unwrap_or(MISSING)
    );
    println!("Region: {}", info.region.as_deref().unwrap_or(MISSING));
    println!(
        "Population: {}",
        format_optional(info.population.map(|p| p as f64), |p| format_number(p, 0))
    );

    if let Some(error) = &detail.error {
        println!();
        println!("{}", error);
    }
    if !detail.economic_indicators.is_empty() {
        println!();
        print_table(Table::from_records(&detail.economic_indicators), sort);
    }
}

/// Register a chart and print it as a table. A failed load shows the error
/// placeholder title, then returns the error.
fn show_chart(
    charts: &mut ChartRegistry,
    id: &str,
    result: Result<ChartData, LibError>,
    template: ChartData,
    sort: &SortArgs,
) -> Result<()> {
    let id = ChartId::from(id);
    let failure = match result {
        Ok(data) => {
            charts.upsert(id.clone(), data);
            None
        }
        Err(e) => {
            charts.fail(id.clone(), template);
            Some(e)
        }
    };

    let Some(entry) = charts.get(&id) else {
        bail!("chart {} was not registered", id);
    };
    println!("{}", entry.data.title);
    if let Some(e) = failure {
        return Err(e.into());
    }
    if !entry.data.is_empty() {
        print_table(entry.data.to_table(), sort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use econdash_lib::chart::ERROR_TITLE;
    use econdash_lib::error::ApiError;
    use econdash_lib::model::RealEstateTrends;

    fn write_fixture(name: &str, json: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("econdash-{}-{}.json", name, std::process::id()));
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_load_map_table_and_sort() {
        let path = write_fixture(
            "map",
            r#"[
                {"country": "Finland", "happiness": 7.7, "lat": 64.0, "lng": 26.0, "code": "FI"},
                {"country": "Chad", "happiness": 4.4, "lat": 15.0, "lng": 19.0, "code": "TD"}
            ]"#,
        );
        let mut table = load_table(&path, RecordKind::Map).unwrap();
        table.sort_by_header("Happiness");
        assert_eq!(table.rows()[0].cells()[0].text(), "Chad");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_invalid_records() {
        let path = write_fixture(
            "bad-map",
            r#"[{"country": "Nowhere", "happiness": 1.0, "lat": 95.0, "lng": 0.0, "code": "NW"}]"#,
        );
        let err = load_table(&path, RecordKind::Map).unwrap_err();
        assert!(err.to_string().contains("[0].lat"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_failed_chart_shows_error_placeholder() {
        let mut charts = ChartRegistry::new();
        let result = Err(ApiError::http(500, "An unexpected error occurred.").into());
        let template = ChartData::labor_market(&Default::default());

        let err = show_chart(&mut charts, "labor-market", result, template, &SortArgs::default())
            .unwrap_err();
        assert!(err.to_string().contains("500"));

        let entry = charts.get(&ChartId::from("labor-market")).unwrap();
        assert_eq!(entry.data.title, ERROR_TITLE);
        assert!(entry.data.is_empty());
        assert_eq!(entry.data.datasets.len(), 6);
    }

    #[test]
    fn test_loaded_chart_is_registered() {
        let mut charts = ChartRegistry::new();
        let trends = RealEstateTrends {
            governorate_name: Some("Sousse".into()),
            years: vec![2023],
            residential_prices: vec![Some(1400.0)],
            commercial_prices: vec![None],
            land_prices: vec![Some(350.0)],
        };
        let result = Ok(ChartData::real_estate(&trends));
        let template = ChartData::real_estate(&Default::default());

        show_chart(&mut charts, "real-estate", result, template, &SortArgs::default()).unwrap();
        let entry = charts.get(&ChartId::from("real-estate")).unwrap();
        assert_eq!(entry.data.title, "Real Estate Price Trends in Sousse");
        assert_eq!(entry.data.labels, vec!["2023"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_table(Path::new("/nonexistent/econdash.json"), RecordKind::Countries)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
