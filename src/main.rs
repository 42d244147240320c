mod config;
mod dispatcher;
mod error;
mod form;
mod renderer;
mod types;

use clap::{Parser, Subcommand};
use config::Config;
use dispatcher::Dispatcher;
use env_logger::Env;
use form::FormFields;
use log::{error, info};
use renderer::ResultRegion;
use std::fs;
use std::path::PathBuf;
use std::process;

#[macro_use]
extern crate failure;

#[derive(Parser)]
#[command(name = "parking-check")]
#[command(about = "Ask the parking server whether a vehicle may park in a lot")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a plate may park in a lot right now
    Check {
        /// License plate, sent as typed
        #[arg(long)]
        plate: String,
        /// Lot or zone name, e.g. "Lot A"
        #[arg(long)]
        lot: String,
        /// faculty, staff or student
        #[arg(long)]
        user_type: String,
        /// Write the rendered result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the lot names the server knows about
    Lots,
    /// List the permit types the server knows about
    Permits,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = run(cli.command).await {
        error!("{}", e);
        process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), failure::Error> {
    let config = Config::from_env()?;
    info!("Using parking server at {}", config.base_url);
    let dispatcher = Dispatcher::new(&config)?;
    match command {
        Command::Check {
            plate,
            lot,
            user_type,
            output,
        } => {
            let form = FormFields {
                license_plate: plate,
                lot_name: lot,
                user_type,
            };
            let mut region = ResultRegion::new();
            dispatcher.check_parking(&form, &mut region).await?;
            match output {
                Some(path) => {
                    fs::write(&path, region.to_markup())
                        .map_err(|e| format_err!("Unable to write {:?}: {}", path, e))?;
                    info!("Wrote result to {:?}", path);
                }
                None => print!("{}", region.to_markup()),
            }
        }
        Command::Lots => print_list(dispatcher.fetch_lots().await?),
        Command::Permits => print_list(dispatcher.fetch_permits().await?),
    }
    Ok(())
}

fn print_list(items: Vec<String>) {
    for item in items {
        println!("{}", item);
    }
}
