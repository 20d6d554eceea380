pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod export;
pub mod history;
pub mod loader;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::services::visualization::VisualizationService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_chart(cli: &Cli) -> Result<()> {
    let config = AppConfig::new();
    let service = VisualizationService::new(config);
    service.run(&cli.input, &cli.output_image, &cli.output_csv)
}
