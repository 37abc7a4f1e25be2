//! Stepguide CLI Application
//!
//! Terminal presentation layer for the stepguide assembly instruction viewer.

mod args;
mod browse;
mod cli;
mod renderer;

use std::io;

use anyhow::{Context, Result};
use args::{Args, Commands};
use browse::Browser;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use stepguide_core::GuideBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        resources_dir,
        no_color,
        command,
    } = Args::parse();

    let guide = GuideBuilder::new()
        .with_resources_dir(resources_dir)
        .build()
        .context("Failed to initialize step guide")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Stepguide started with {}", guide.resources_dir().display());

    match command {
        Some(Steps(args)) => Cli::new(guide, renderer).list_steps(&args),
        Some(Show(args)) => Cli::new(guide, renderer).show_step(&args),
        Some(Notes { command }) => Cli::new(guide, renderer).handle_notes_command(command),
        Some(Browse) => Browser::new(guide, renderer).run(io::stdin().lock()),
        None => Cli::new(guide, renderer).overview(),
    }
}
