//! Generated file placement: source templates, package paths and filter files

pub mod templates;

pub use templates::SourceTemplate;

use crate::constants::FlatReferenceTable;
use crate::core::constants::file_names;
use crate::core::utils::FileUtils;
use crate::error::DistroResult;
use std::path::{Path, PathBuf};
use tracing::info;

/// What a generation goal wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub source_files: Vec<PathBuf>,
    pub filter_file: PathBuf,
    pub property_count: usize,
}

/// Path of the source file for `class_name` in `package` under `output_dir`
pub fn source_file_path(output_dir: &Path, package: &str, class_name: &str) -> PathBuf {
    let mut path = output_dir.to_path_buf();
    for segment in package.split('.').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push(format!("{class_name}.{}", file_names::SOURCE_EXTENSION));
    path
}

/// Write a generated source file, creating package directories as needed
pub fn write_source_file(
    output_dir: &Path,
    package: &str,
    class_name: &str,
    content: &str,
) -> DistroResult<PathBuf> {
    let path = source_file_path(output_dir, package, class_name);
    FileUtils::write_with_context(&path, content, "generated source")?;
    info!("Generated {}", path.display());
    Ok(path)
}

/// Write `table` as a `key=value` per line filter file
pub fn write_filter_file(path: &Path, table: &FlatReferenceTable) -> DistroResult<()> {
    FileUtils::write_with_context(path, &table.to_properties_string(), "filter file")?;
    info!("Generated {} with {} properties", path.display(), table.len());
    Ok(())
}
