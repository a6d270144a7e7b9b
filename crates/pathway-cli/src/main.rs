//! Pathway CLI Application
//!
//! Command-line interface for the personalized learning plan assistant.

mod args;
mod cli;
mod form;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use form::Terminal;
use log::info;
use pathway_core::{Orchestrator, ServiceBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        endpoint,
        no_color,
        command,
    } = Args::parse();

    let service = ServiceBuilder::new()
        .with_endpoint(endpoint)
        .build()
        .context("Failed to configure plan service")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Pathway started");

    let mut cli = Cli::new(Orchestrator::new(service), renderer);
    match command {
        Some(Generate(args)) => cli.generate(&args.into()).await,
        Some(Form) | None => {
            let mut terminal = Terminal::new()?;
            cli.run_form(&mut terminal).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
