//! Fleet Ratings - Development Tools

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ratings_core::universe::FleetId;
use ratings_tools::load::{load_model, load_universe, Result};
use ratings_tools::report::{rate, standard, RateOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ratings-tools")]
#[command(about = "Development tools for fleet combat ratings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rate fleets in a universe snapshot
    Rate {
        /// Path to the universe snapshot (RON)
        universe: PathBuf,
        /// Fleet to rate (repeatable; defaults to all military fleets)
        #[arg(long = "fleet")]
        fleets: Vec<i32>,
        /// Rate against the most common ship of this fleet
        #[arg(long)]
        enemy_fleet: Option<i32>,
        /// Use maximum meters (refuelled and repaired ships)
        #[arg(long)]
        refuel: bool,
        /// Adjust ships by their crew's piloting grades
        #[arg(long)]
        pilots: bool,
        /// Rating model overrides (RON)
        #[arg(long)]
        model: Option<PathBuf>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the empire's standard fighter
    Standard {
        /// Path to the universe snapshot (RON)
        universe: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Validate a universe snapshot
    Validate {
        /// Path to the universe snapshot (RON)
        universe: PathBuf,
    },
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Rate {
            universe,
            fleets,
            enemy_fleet,
            refuel,
            pilots,
            model,
            json,
        } => {
            let universe = load_universe(&universe)?;
            let options = RateOptions {
                fleets: fleets.into_iter().map(FleetId).collect(),
                enemy_fleet: enemy_fleet.map(FleetId),
                consider_refuel: refuel,
                apply_pilots: pilots,
                model: load_model(model.as_deref())?,
            };
            let report = rate(&universe, &options)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
        }
        Commands::Standard { universe, json } => {
            let report = standard(&load_universe(&universe)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
        }
        Commands::Validate { universe } => {
            ratings_tools::validate::validate_snapshot(&universe)?;
            tracing::info!("Validation passed");
        }
    }
    Ok(())
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
