use anyhow::{bail, Result};
use std::path::PathBuf;

use crate::cli::commands::Command;
use crate::config::{ConfigAction, ToolConfig};
use crate::core::constants::defaults;
use crate::core::utils::FileUtils;

pub struct ConfigCommand {
    action: ConfigAction,
    config_path: Option<PathBuf>,
}

impl ConfigCommand {
    pub fn new(action: ConfigAction, config_path: Option<PathBuf>) -> Self {
        Self {
            action,
            config_path,
        }
    }

    fn path(&self) -> Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => Ok(std::env::current_dir()?.join(defaults::SETTINGS_FILE)),
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self) -> Result<()> {
        let config_path = self.path()?;

        match &self.action {
            ConfigAction::Init => {
                if config_path.exists() {
                    bail!("{} already exists", config_path.display());
                }
                let toml_content = ToolConfig::default().to_toml_string()?;
                FileUtils::write_with_context(&config_path, &toml_content, "settings file")?;
                println!("Configuration initialized at {}", config_path.display());
            }

            ConfigAction::Show => {
                if config_path.is_file() {
                    let config = ToolConfig::from_file(&config_path)?;
                    println!("{}", config.to_toml_string()?);
                } else {
                    println!("No configuration file found. Use 'config init' to create one.");
                    println!("{}", ToolConfig::default().to_toml_string()?);
                }
            }
        }

        Ok(())
    }
}
