mod app;
mod config;
mod error;
mod paths;

use std::fs::{self, File};
use std::path::PathBuf;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::config::DemoConfig;
use crate::error::DemoError;

const LOG_ENV: &str = "SELECTOR_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), DemoError> {
    init_logging()?;

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = DemoConfig::load(path.as_deref())?;

    App::new(config)?.run().await
}

fn init_logging() -> Result<(), DemoError> {
    let path = match paths::log_file() {
        Some(path) => {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            paths::rotate_logs(&path);
            path
        }
        None => PathBuf::from("latest.log"),
    };

    let file = File::create(&path)?;
    WriteLogger::init(log_level(), Config::default(), file)?;
    log::info!("Logging to {}", path.display());
    Ok(())
}

/// Level from `SELECTOR_LOG`, debug when unset or unparsable.
fn log_level() -> LevelFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Debug)
}
