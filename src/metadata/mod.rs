//! Metadata references: concept and form uuids as a `Metadata` class and filter file

pub mod config;
pub mod loader;
pub mod renderer;

pub use config::MetadataConfig;
pub use loader::{load_from_directory, load_metadata_items, parse_metadata_items};
pub use renderer::{render_items_as_constants, render_metadata_source};

use crate::config::MetadataSettings;
use crate::core::constants::{file_names, METADATA_PROPERTY_PREFIX};
use crate::error::DistroResult;
use crate::output::{self, GenerationSummary};
use tracing::info;

/// Run the metadata goal: `Metadata.java` plus `metadata.properties`
pub fn generate_metadata(settings: &MetadataSettings) -> DistroResult<GenerationSummary> {
    let package = settings.package()?;
    let config = load_from_directory(&settings.input_dir)?;

    let source = render_metadata_source(&package, &config);
    let table = config.to_properties(METADATA_PROPERTY_PREFIX);

    let source_file = output::write_source_file(
        &settings.output_dir,
        &package,
        file_names::METADATA_CLASS,
        &source,
    )?;
    output::write_filter_file(&settings.filter_file, &table)?;

    info!(
        "Generated metadata for {} references across {} types",
        config.reference_count(),
        config.configured_types().count()
    );

    Ok(GenerationSummary {
        source_files: vec![source_file],
        filter_file: settings.filter_file.clone(),
        property_count: table.len(),
    })
}
