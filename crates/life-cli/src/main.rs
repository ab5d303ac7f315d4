//! Terminal front end for the toroidal Game of Life.

mod cli;
mod icons;
mod runner;
mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use cli::CliArgs;
use life_world::Simulation;
use runner::{Player, RunSummary};
use std::io::Write;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    if args.list_icons {
        print!("{}", icons::listing());
        return Ok(());
    }

    telemetry::init_logging(args.verbose)?;

    let config = args.resolve()?;
    info!(?config, "Starting run");

    let icon = icons::resolve(&config.icon);
    let seeding = runner::choose_seeding(&config);
    let simulation = Simulation::new(seeding.width, seeding.height, seeding.source)
        .context("Could not create simulation")?;

    let mut player = Player::new(simulation, icon.glyphs(), &config);
    let mut stdout = std::io::stdout().lock();
    player.play(&mut stdout, shutdown_signal()).await?;

    let summary = RunSummary {
        generations_calculated: player.simulation().generation_count(),
        width: seeding.width,
        height: seeding.height,
        resume_flag: seeding.resume_flag,
        icon: icon.name.to_string(),
        generations: config.generations,
    };
    writeln!(stdout, "\n{}", summary)?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
