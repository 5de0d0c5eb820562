//! Form validation: structure checks, comment stripping and macro expansion

pub mod macros;
pub mod validator;
pub mod xml;

pub use macros::{apply_macros, parse_macros, Macros, MalformedEscape};
pub use validator::{strip_comments, validate_form, FormReport, FormValidator};
pub use xml::{check_form_structure, extract_macros, ExtractedMacros};

use crate::config::FormsSettings;
use crate::core::utils::FileUtils;
use crate::error::DistroResult;
use std::path::PathBuf;
use tracing::info;

/// What the forms goal checked and wrote
#[derive(Debug, Clone, Default)]
pub struct FormsSummary {
    pub reports: Vec<FormReport>,
    /// Expanded forms written to the output directory, if one is configured
    pub written: Vec<PathBuf>,
}

/// Run the forms goal over the configured directory
pub fn validate_forms(settings: &FormsSettings) -> DistroResult<FormsSummary> {
    let forms_dir = settings.forms_dir()?;
    let validator = FormValidator::new(settings.extension()?);
    let reports = validator.validate_directory(forms_dir)?;

    let mut written = Vec::new();
    if let Some(output_dir) = &settings.output_dir {
        for report in &reports {
            let relative = report.path.strip_prefix(forms_dir).unwrap_or(&report.path);
            let target = output_dir.join(relative);
            FileUtils::write_with_context(&target, &report.expanded, "expanded form")?;
            written.push(target);
        }
        info!("Wrote {} expanded forms to {}", written.len(), output_dir.display());
    }

    Ok(FormsSummary { reports, written })
}
