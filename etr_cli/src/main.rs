use std::path::PathBuf;

use clap::{Parser, Subcommand};
use etr_pricing::config::EtrConfig;
use etr_pricing::location::LocationId;
use etr_pricing::pricing::PricingEngine;
use mimalloc::MiMalloc;
use tracing::debug;

use crate::cost::CostArgs;

mod cost;
mod locations;

#[cfg(test)]
mod test_utils;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Interchanges document, overrides ETR_INTERCHANGES_FILE
    #[arg(long, global = true)]
    interchanges: Option<PathBuf>,

    /// Vehicle rates document, overrides ETR_RATES_FILE
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    /// Id of the location the walk starts from, overrides ETR_ROOT_LOCATION_ID
    #[arg(long, global = true)]
    root: Option<String>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a trip between two locations
    Cost {
        #[command(flatten)]
        args: CostArgs,
    },
    /// List the locations in walk order
    #[command(visible_alias = "ls")]
    Locations,
}

impl Cli {
    fn config(&self) -> anyhow::Result<EtrConfig> {
        let mut config = EtrConfig::from_env()?;

        if let Some(path) = &self.interchanges {
            config.interchanges_path = path.clone();
        }
        if let Some(path) = &self.rates {
            config.rates_path = path.clone();
        }
        if let Some(root) = &self.root {
            config.root_location_id = LocationId::parse(root)?;
        }

        Ok(config)
    }
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config()?;
    debug!(?config, "Loading pricing engine");

    match cli.command {
        Some(Commands::Cost { args }) => {
            let engine = PricingEngine::from_config(&config)?;
            cost::run(&engine, args)?
        }
        Some(Commands::Locations) => {
            let engine = PricingEngine::from_config(&config)?;
            locations::run(&engine)
        }
        None => {}
    }

    Ok(())
}
