use anyhow::{Context, Result};
use colored::*;

use crate::cli::commands::Command;
use crate::config::FormsSettings;
use crate::forms::validate_forms;

pub struct ValidateFormsCommand {
    settings: FormsSettings,
}

impl ValidateFormsCommand {
    pub fn new(settings: FormsSettings) -> Self {
        Self { settings }
    }
}

impl Command for ValidateFormsCommand {
    fn execute(&self) -> Result<()> {
        let summary = validate_forms(&self.settings).context("Form validation failed")?;

        println!(
            "{} {} ({} forms)",
            "✓".green().bold(),
            "validate-forms".bold(),
            summary.reports.len()
        );
        for report in &summary.reports {
            let mut notes = Vec::new();
            if report.macros_applied > 0 {
                notes.push(format!("{} macro substitutions", report.macros_applied));
            }
            if report.comments_stripped {
                notes.push("comments stripped".to_string());
            }

            if notes.is_empty() {
                println!("  {}", report.path.display());
            } else {
                println!("  {} {}", report.path.display(), notes.join(", ").dimmed());
            }
        }
        if !summary.written.is_empty() {
            println!("  {} {} expanded forms", "wrote".cyan(), summary.written.len());
        }
        Ok(())
    }
}
