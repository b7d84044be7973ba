//! Dialectic CLI entry point.

use anyhow::Result;
use clap::Parser;

use dialectic::cli::{Cli, Commands};
use dialectic::domain::models::Config;
use dialectic::infrastructure::config::ConfigLoader;
use dialectic::infrastructure::logging::{LogConfig, LoggerImpl};

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => dialectic::cli::handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&LogConfig::from(&config.logging)) {
        Ok(logger) => logger,
        Err(err) => dialectic::cli::handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Run(args) => dialectic::cli::commands::run::execute(args, &config, cli.json).await,
        Commands::Diff(args) => dialectic::cli::commands::diff::execute(args, cli.json).await,
        Commands::Example => dialectic::cli::commands::example::execute(cli.json).await,
    };

    if let Err(err) = result {
        dialectic::cli::handle_error(err, cli.json);
    }
}
