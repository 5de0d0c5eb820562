//! Constant hierarchies: JSON documents to nested classes and a filter file
//!
//! A document is a mapping from top-level group names to group bodies. Bodies
//! hold scalar members, list members and nested groups. Each top-level group
//! becomes one source file; all groups together flatten into dotted
//! `Group.Nested.member=value` properties.

pub mod builder;
pub mod loader;
pub mod model;
pub mod renderer;
pub mod table;

pub use builder::{build_model, ConstantDocument, ConstantModelBuilder};
pub use loader::load_documents;
pub use model::{ConfigValue, ConstantGroup, ConstantValue};
pub use renderer::{flatten, render, render_group, ClassRenderer, ConstantFlattener, RenderedConstants};
pub use table::FlatReferenceTable;

use crate::config::ConstantsSettings;
use crate::error::DistroResult;
use crate::output::{self, GenerationSummary, SourceTemplate};
use tracing::info;

/// Run the constants goal: one source file per top-level group, then the filter file.
///
/// Nothing is written unless every document loads and builds.
pub fn generate_constants(settings: &ConstantsSettings) -> DistroResult<GenerationSummary> {
    let package = settings.package()?;
    let documents = load_documents(&settings.input_dir)?;
    let groups = build_model(&documents)?;

    let sources: Vec<(&str, String)> = groups
        .iter()
        .map(|group| {
            let body = render_group(group);
            let source = SourceTemplate::Constant
                .render(&[("PACKAGE", package.as_str()), ("CLASS_BODY", body.as_str())]);
            (group.name(), source)
        })
        .collect();
    let table = flatten(&groups);

    let mut source_files = Vec::with_capacity(sources.len());
    for (class_name, source) in &sources {
        source_files.push(output::write_source_file(
            &settings.output_dir,
            &package,
            class_name,
            source,
        )?);
    }
    output::write_filter_file(&settings.filter_file, &table)?;

    info!(
        "Generated {} constant classes and {} properties",
        source_files.len(),
        table.len()
    );

    Ok(GenerationSummary {
        source_files,
        filter_file: settings.filter_file.clone(),
        property_count: table.len(),
    })
}
