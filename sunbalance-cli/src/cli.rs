use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};
use sunbalance_core::{Config, Coordinate, OpenUvProvider, safe_exposure};

use crate::report;

// Mexico City, the prompt defaults when no flags are given.
const DEFAULT_LATITUDE: f64 = 19.4326;
const DEFAULT_LONGITUDE: f64 = -99.1332;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "sunbalance", version, about = "UV index & safe sun exposure tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenUV API key used by `show`.
    Configure,

    /// Fetch and report the UV index for a coordinate.
    Show {
        /// Latitude in degrees; prompted for interactively when absent.
        #[arg(long)]
        lat: Option<f64>,

        /// Longitude in degrees; prompted for interactively when absent.
        #[arg(long)]
        lng: Option<f64>,
    },

    /// Print the Fitzpatrick skin type glossary.
    SkinTypes,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { lat, lng } => show(lat, lng).await,
            Command::SkinTypes => {
                report::print_glossary();
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenUV API key:")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

/// One fetch-and-report cycle. Stateless: nothing carries over between runs.
async fn show(lat: Option<f64>, lng: Option<f64>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let api_key = config.require_api_key()?;

    let coord = Coordinate {
        latitude: resolve_coordinate(lat, "Latitude", DEFAULT_LATITUDE)?,
        longitude: resolve_coordinate(lng, "Longitude", DEFAULT_LONGITUDE)?,
    };

    let provider = OpenUvProvider::new(api_key.to_owned());

    // A failed fetch is part of the report, not a process error.
    match provider.fetch(coord).await {
        Ok(reading) => report::print_report(&reading, &safe_exposure(reading.uv)),
        Err(err) => report::print_error(&err),
    }

    Ok(())
}

/// Use the flag value when given, otherwise ask interactively.
fn resolve_coordinate(value: Option<f64>, label: &str, default: f64) -> anyhow::Result<f64> {
    match value {
        Some(v) => Ok(v),
        None => CustomType::<f64>::new(&format!("{label}:"))
            .with_default(default)
            .with_error_message("Please enter a number")
            .prompt()
            .with_context(|| format!("Failed to read {label}")),
    }
}
