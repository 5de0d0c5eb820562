use anyhow::{Context, Result};

use crate::cli::commands::{utils, Command};
use crate::config::MetadataSettings;
use crate::metadata::generate_metadata;

pub struct GenerateMetadataCommand {
    settings: MetadataSettings,
}

impl GenerateMetadataCommand {
    pub fn new(settings: MetadataSettings) -> Self {
        Self { settings }
    }
}

impl Command for GenerateMetadataCommand {
    fn execute(&self) -> Result<()> {
        let summary = generate_metadata(&self.settings).with_context(|| {
            format!(
                "Failed to generate metadata from {}",
                self.settings.input_dir.display()
            )
        })?;

        utils::print_generation_summary("generate-metadata", &summary);
        Ok(())
    }
}
