use anyhow::{Context, Result};

use crate::cli::commands::{utils, Command};
use crate::config::ConstantsSettings;
use crate::constants::generate_constants;

pub struct GenerateConstantsCommand {
    settings: ConstantsSettings,
}

impl GenerateConstantsCommand {
    pub fn new(settings: ConstantsSettings) -> Self {
        Self { settings }
    }
}

impl Command for GenerateConstantsCommand {
    fn execute(&self) -> Result<()> {
        let summary = generate_constants(&self.settings).with_context(|| {
            format!(
                "Failed to generate constants from {}",
                self.settings.input_dir.display()
            )
        })?;

        utils::print_generation_summary("generate-constants", &summary);
        Ok(())
    }
}
