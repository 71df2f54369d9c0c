mod args;
mod commands;
mod paths;

use std::fs::{self, File};

use anyhow::Result;
use clap::Parser;
use econdash_lib::DashboardConfig;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::args::Cli;

/// Log to `latest.log` in the cache directory. Logging is best effort: the
/// command still runs when the file cannot be created.
fn init_logging(level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }
    paths::rotate_logs();

    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, Config::default(), file);
        }
        Err(e) => eprintln!("warning: cannot create log file {}: {}", path.display(), e),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging(cli.log_level.into());

    if let Ok(path) = dotenv {
        log::debug!("Loaded environment from {}", path.display());
    }

    let mut config = DashboardConfig::from_env()?;
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }
    log::info!("Using API at {}", config.base_url);

    commands::run(cli.command, &config).await
}
