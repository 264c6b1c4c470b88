#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{AppCommands, Cli};
use anyhow::{Context, Result};
use clap::Parser;
use mlife::domain::config::ApiConfig;
use mlife::domain::life::OperatingProfile;
use mlife::kernel::config::load_config;
use mlife_logger::{LevelFilter, Logger};

#[mlife_runtime::main(current_thread)]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN })
        .stderr(true)
        .init()?;

    let cfg: ApiConfig = load_config(cli.config.as_ref()).context("Configuration is malformed")?;

    let output = match cli.command {
        AppCommands::Estimate { usage_hours, stress_cycles, temperature, json } => {
            let profile = OperatingProfile::new(usage_hours, stress_cycles, temperature);
            handlers::estimate(&cfg, &profile, json)?
        },
        AppCommands::Parameters { monthly: Some(name) } => handlers::monthly(&cfg, &name)?,
        AppCommands::Parameters { monthly: None } => handlers::parameters(&cfg)?,
    };

    println!("{output}");
    Ok(())
}
