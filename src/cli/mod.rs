//! Command line interface

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, FormsArgs, GenerateArgs};

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::ToolConfig;
use commands::{
    Command, ConfigCommand, GenerateConstantsCommand, GenerateMetadataCommand,
    ValidateFormsCommand,
};

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("distro_tools={}", log_level))
        .init();

    let command: Box<dyn Command> = match &cli.command {
        Commands::GenerateConstants(args) => {
            let mut settings = load_settings(&cli)?.constants;
            args.apply_to_constants(&mut settings);
            Box::new(GenerateConstantsCommand::new(settings))
        }
        Commands::GenerateMetadata(args) => {
            let mut settings = load_settings(&cli)?.metadata;
            args.apply_to_metadata(&mut settings);
            Box::new(GenerateMetadataCommand::new(settings))
        }
        Commands::ValidateForms(args) => {
            let mut settings = load_settings(&cli)?.forms;
            args.apply_to(&mut settings);
            Box::new(ValidateFormsCommand::new(settings))
        }
        Commands::Config { action } => Box::new(ConfigCommand::new(action.clone(), cli.config.clone())),
    };

    command.execute()
}

fn load_settings(cli: &Cli) -> Result<ToolConfig> {
    ToolConfig::load(cli.config.as_deref()).context("Failed to load settings")
}
