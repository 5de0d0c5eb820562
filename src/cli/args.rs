use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ConfigAction, ConstantsSettings, FormsSettings, MetadataSettings};

/// Build-time generator for distribution constants, metadata references and forms.
///
/// Settings are read from `distro-tools.toml` in the working directory (or the
/// file given with `--config`); command line flags override them.
///
/// # Examples
///
/// ```bash
/// # Generate constant classes into the default output directory
/// distro-tools generate-constants --package org.example.distro
///
/// # Validate forms and write the expanded versions
/// distro-tools validate-forms --forms-dir src/main/distro/forms --output-dir target/forms
/// ```
#[derive(Parser)]
#[command(name = "distro-tools")]
#[command(about = "Code generation and validation for distribution configuration")]
#[command(version)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (default: ./distro-tools.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate constant classes and constants.properties from JSON files
    GenerateConstants(GenerateArgs),

    /// Generate the Metadata class and metadata.properties from XML files
    GenerateMetadata(GenerateArgs),

    /// Validate form files, stripping comments and applying macros
    ValidateForms(FormsArgs),

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Overrides shared by the generation goals
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Directory containing the input files
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Root directory for generated sources
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Package of the generated classes
    #[arg(long)]
    pub package: Option<String>,

    /// Properties file to write
    #[arg(long)]
    pub filter_file: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn apply_to_constants(&self, settings: &mut ConstantsSettings) {
        if let Some(dir) = &self.input_dir {
            settings.input_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            settings.output_dir = dir.clone();
        }
        if let Some(package) = &self.package {
            settings.package = Some(package.clone());
        }
        if let Some(file) = &self.filter_file {
            settings.filter_file = file.clone();
        }
    }

    pub fn apply_to_metadata(&self, settings: &mut MetadataSettings) {
        if let Some(dir) = &self.input_dir {
            settings.input_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            settings.output_dir = dir.clone();
        }
        if let Some(package) = &self.package {
            settings.package = Some(package.clone());
        }
        if let Some(file) = &self.filter_file {
            settings.filter_file = file.clone();
        }
    }
}

/// Overrides for form validation
#[derive(Args, Debug, Clone, Default)]
pub struct FormsArgs {
    /// Directory searched recursively for forms
    #[arg(long)]
    pub forms_dir: Option<PathBuf>,

    /// Form file extension
    #[arg(long)]
    pub extension: Option<String>,

    /// Write expanded forms here, keeping relative paths
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl FormsArgs {
    pub fn apply_to(&self, settings: &mut FormsSettings) {
        if let Some(dir) = &self.forms_dir {
            settings.forms_dir = Some(dir.clone());
        }
        if let Some(extension) = &self.extension {
            settings.extension = extension.clone();
        }
        if let Some(dir) = &self.output_dir {
            settings.output_dir = Some(dir.clone());
        }
    }
}
