//! Discovery and decoding of JSON constant documents

use crate::constants::builder::ConstantDocument;
use crate::core::constants::file_names;
use crate::core::utils::FileUtils;
use crate::error::DistroResult;
use std::path::Path;
use tracing::info;

/// Load every `*.json` document under `dir`, in path order
pub fn load_documents(dir: &Path) -> DistroResult<Vec<ConstantDocument>> {
    let files = FileUtils::find_files(dir, file_names::CONSTANTS_EXTENSION)?;
    info!("Found {} constant files in {}", files.len(), dir.display());

    files
        .iter()
        .map(|path| {
            info!("Processing {}", path.display());
            let content = FileUtils::read_with_context(path, "constants file")?;
            ConstantDocument::from_json_str(path.display().to_string(), &content)
        })
        .collect()
}
