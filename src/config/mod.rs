//! Settings for the generation goals, loaded from `distro-tools.toml`

pub mod validation;

pub use validation::{validate_extension, validate_package_name, ConfigValidationError};

use crate::core::constants::defaults;
use crate::core::utils::FileUtils;
use crate::error::{DistroError, DistroResult};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration actions
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Write a settings file with default values
    Init,
    /// Show the effective settings
    Show,
}

/// All settings, one section per goal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub constants: ConstantsSettings,
    pub metadata: MetadataSettings,
    pub forms: FormsSettings,
}

/// `generate-constants` settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantsSettings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub package: Option<String>,
    pub filter_file: PathBuf,
}

impl Default for ConstantsSettings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(defaults::CONSTANTS_DIR),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            package: None,
            filter_file: PathBuf::from(defaults::CONSTANTS_FILTER_FILE),
        }
    }
}

impl ConstantsSettings {
    /// The validated output package
    pub fn package(&self) -> DistroResult<String> {
        Ok(validate_package_name("constants.package", self.package.as_deref())?)
    }
}

/// `generate-metadata` settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataSettings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub package: Option<String>,
    pub filter_file: PathBuf,
}

impl Default for MetadataSettings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(defaults::METADATA_DIR),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            package: None,
            filter_file: PathBuf::from(defaults::METADATA_FILTER_FILE),
        }
    }
}

impl MetadataSettings {
    pub fn package(&self) -> DistroResult<String> {
        Ok(validate_package_name("metadata.package", self.package.as_deref())?)
    }
}

/// `validate-forms` settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsSettings {
    /// Directory searched recursively for form files (required)
    pub forms_dir: Option<PathBuf>,
    pub extension: String,
    /// When set, expanded forms are written here under their relative paths
    pub output_dir: Option<PathBuf>,
}

impl Default for FormsSettings {
    fn default() -> Self {
        Self {
            forms_dir: None,
            extension: defaults::FORMS_EXTENSION.to_string(),
            output_dir: None,
        }
    }
}

impl FormsSettings {
    pub fn forms_dir(&self) -> DistroResult<&Path> {
        self.forms_dir.as_deref().ok_or_else(|| {
            ConfigValidationError::MissingField {
                field: "forms.forms_dir".to_string(),
            }
            .into()
        })
    }

    pub fn extension(&self) -> DistroResult<String> {
        Ok(validate_extension("forms.extension", &self.extension)?)
    }
}

impl ToolConfig {
    /// Load settings from `path`, or from `distro-tools.toml` in the working
    /// directory when no path is given. A missing default file means defaults.
    pub fn load(path: Option<&Path>) -> DistroResult<Self> {
        match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(DistroError::Settings {
                        message: format!("settings file {} not found", path.display()),
                    });
                }
                Self::from_file(path)
            }
            None => {
                let default_path = Path::new(defaults::SETTINGS_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    debug!("No {} found, using default settings", defaults::SETTINGS_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> DistroResult<Self> {
        let content = FileUtils::read_with_context(path, "settings file")?;
        Self::from_toml_str(&content).map_err(|e| DistroError::Settings {
            message: format!("{}: {e}", path.display()),
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> DistroResult<String> {
        toml::to_string_pretty(self).map_err(|e| DistroError::Settings {
            message: format!("failed to serialize settings: {e}"),
        })
    }
}
