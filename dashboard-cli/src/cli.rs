use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use dashboard_core::{Config, Dashboard, ForecastClient, ForecastProvider};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Weather dashboard in your terminal")]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and a default location.
    Configure,

    /// Fetch the forecast once and show the dashboard.
    Show {
        /// Location name; falls back to the configured default.
        location: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location } => show(location).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Text::new("WeatherAPI.com API key:").prompt()?;
    config.set_api_key(api_key.trim().to_string());

    let location = inquire::Text::new("Default location:")
        .with_default(config.location_or_default())
        .prompt()?;
    config.set_location(location.trim().to_string());

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(location: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let api_key = config.api_key()?;

    let location = location.as_deref().unwrap_or_else(|| config.location_or_default());
    info!(location, "fetching forecast");

    let client = ForecastClient::new(api_key.to_string());

    // One request per invocation; a failure ends the run with a nonzero exit.
    let response = match client.forecast(location).await {
        Ok(response) => response,
        Err(err) => {
            error!(error = %err, location, "failed to fetch forecast");
            return Err(err.into());
        }
    };

    let dashboard = Dashboard::from_response(&response)?;
    println!("{}", render::render(&dashboard));

    Ok(())
}
