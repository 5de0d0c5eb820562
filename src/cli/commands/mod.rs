use anyhow::Result;

pub mod config;
pub mod generate_constants;
pub mod generate_metadata;
pub mod validate_forms;

pub use config::ConfigCommand;
pub use generate_constants::GenerateConstantsCommand;
pub use generate_metadata::GenerateMetadataCommand;
pub use validate_forms::ValidateFormsCommand;

/// Trait for CLI command implementations
pub trait Command {
    /// Execute the command with the given arguments
    fn execute(&self) -> Result<()>;
}

/// Common utilities for command implementations
pub mod utils {
    use crate::output::GenerationSummary;
    use colored::*;

    /// Print what a generation goal wrote
    pub fn print_generation_summary(goal: &str, summary: &GenerationSummary) {
        println!("{} {}", "✓".green().bold(), goal.bold());
        for file in &summary.source_files {
            println!("  {} {}", "source".cyan(), file.display());
        }
        println!(
            "  {} {} ({} properties)",
            "filter".cyan(),
            summary.filter_file.display(),
            summary.property_count
        );
    }
}
