use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use simplelog::LevelFilter;

#[derive(Parser)]
#[command(name = "econdash")]
#[command(about = "Query the economic dashboard API and print sortable tables", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Overrides ECONDASH_BASE_URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a saved endpoint response as a table
    Table {
        file: PathBuf,

        #[arg(long)]
        kind: RecordKind,

        #[command(flatten)]
        sort: SortArgs,
    },

    /// Countries with a happiness score in the latest year
    Map {
        #[command(flatten)]
        sort: SortArgs,
    },

    /// Search countries by name or code
    Search {
        query: String,

        #[command(flatten)]
        sort: SortArgs,
    },

    /// Yearly indicators for one country
    Detail {
        country: String,

        #[command(flatten)]
        sort: SortArgs,
    },

    /// Average inflation by year
    Inflation {
        #[arg(long)]
        continent: Option<String>,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        start_year: Option<i32>,

        #[arg(long)]
        end_year: Option<i32>,

        #[command(flatten)]
        sort: SortArgs,
    },

    /// PC1 loadings from the correlation analysis
    Correlation {
        #[command(flatten)]
        sort: SortArgs,
    },

    /// Real estate prices for a Tunisian governorate
    RealEstate {
        /// Defaults to Tunis, or the first listed governorate
        governorate_id: Option<u32>,

        #[command(flatten)]
        sort: SortArgs,
    },

    /// Labor market series for a Tunisian governorate
    Labor {
        /// Defaults to Tunis, or the first listed governorate
        governorate_id: Option<u32>,

        #[command(flatten)]
        sort: SortArgs,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct SortArgs {
    /// Activate a column header; repeat to toggle or chain sorts
    #[arg(long = "sort", value_name = "COLUMN")]
    pub columns: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RecordKind {
    /// search-countries response
    Countries,
    /// country-detail response
    Indicators,
    /// inflation-trends response
    Inflation,
    /// global-dashboard-data response
    Map,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_sort_flags_keep_order() {
        let cli = Cli::try_parse_from([
            "econdash",
            "table",
            "data.json",
            "--kind",
            "countries",
            "--sort",
            "Happiness",
            "--sort",
            "Happiness",
            "--sort",
            "Name",
        ])
        .unwrap();

        match cli.command {
            Commands::Table { kind, sort, .. } => {
                assert!(matches!(kind, RecordKind::Countries));
                assert_eq!(sort.columns, vec!["Happiness", "Happiness", "Name"]);
            }
            _ => panic!("expected table command"),
        }
    }

    #[test]
    fn test_inflation_filter_flags() {
        let cli = Cli::try_parse_from([
            "econdash",
            "--log-level",
            "debug",
            "inflation",
            "--continent",
            "Africa",
            "--start-year",
            "2010",
        ])
        .unwrap();

        assert!(matches!(cli.log_level, LogLevel::Debug));
        match cli.command {
            Commands::Inflation {
                continent,
                country,
                start_year,
                end_year,
                sort,
            } => {
                assert_eq!(continent.as_deref(), Some("Africa"));
                assert_eq!(country, None);
                assert_eq!(start_year, Some(2010));
                assert_eq!(end_year, None);
                assert!(sort.columns.is_empty());
            }
            _ => panic!("expected inflation command"),
        }
    }

    #[test]
    fn test_governorate_id_is_optional() {
        let cli = Cli::try_parse_from(["econdash", "labor"]).unwrap();
        assert!(matches!(cli.command, Commands::Labor { governorate_id: None, .. }));

        let cli = Cli::try_parse_from(["econdash", "real-estate", "12"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::RealEstate {
                governorate_id: Some(12),
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(
            Cli::try_parse_from(["econdash", "table", "x.json", "--kind", "planets"]).is_err()
        );
    }
}
