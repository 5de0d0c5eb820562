use crate::core::utils::FileUtils;
use crate::error::{DistroError, DistroResult};
use crate::forms::macros::{apply_macros, parse_macros};
use crate::forms::xml::{check_form_structure, extract_macros};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

static COMMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<!\s*--.*?--\s*>").expect("comment pattern is valid")
});

/// Remove `<!-- ... -->` comments, including ones spanning several lines
pub fn strip_comments(xml: &str) -> String {
    COMMENT_PATTERN.replace_all(xml, "").into_owned()
}

/// Outcome of validating one form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    pub path: PathBuf,
    /// Number of `$name` substitutions made
    pub macros_applied: usize,
    pub comments_stripped: bool,
    /// The form with comments stripped and macros applied
    pub expanded: String,
}

/// Validates form files with a given extension
#[derive(Debug, Clone)]
pub struct FormValidator {
    extension: String,
}

impl FormValidator {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    pub fn find_form_files(&self, dir: &Path) -> DistroResult<Vec<PathBuf>> {
        FileUtils::find_files(dir, &self.extension)
    }

    /// Validate every form under `dir`, stopping at the first invalid one
    pub fn validate_directory(&self, dir: &Path) -> DistroResult<Vec<FormReport>> {
        let files = self.find_form_files(dir)?;
        info!("Found {} form files", files.len());

        files.iter().map(|path| self.validate_form(path)).collect()
    }

    pub fn validate_form(&self, path: &Path) -> DistroResult<FormReport> {
        let xml = fs::read_to_string(path)
            .map_err(|e| DistroError::form(path, format!("Unable to load: {e}")))?;

        let report = self.validate_form_str(path, &xml)?;
        info!("Validated form file '{}'", path.display());
        Ok(report)
    }

    /// Validate form text read from `path`
    pub fn validate_form_str(&self, path: &Path, xml: &str) -> DistroResult<FormReport> {
        check_form_structure(path, xml)?;

        let stripped = strip_comments(xml);
        let comments_stripped = stripped.len() != xml.len();

        let (expanded, macros_applied) = match extract_macros(path, &stripped)? {
            Some(extracted) => {
                let macros = parse_macros(&extracted.definitions)
                    .map_err(|e| DistroError::form(path, e.to_string()))?;
                debug!("{} defines {} macros", path.display(), macros.len());
                apply_macros(&extracted.xml, &macros)
            }
            None => (stripped, 0),
        };

        Ok(FormReport {
            path: path.to_path_buf(),
            macros_applied,
            comments_stripped,
            expanded,
        })
    }
}

/// Validate a single form file
pub fn validate_form(path: &Path) -> DistroResult<FormReport> {
    FormValidator::new(crate::core::constants::defaults::FORMS_EXTENSION).validate_form(path)
}
