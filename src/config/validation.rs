//! Validation of settings values before any generation runs

use crate::error::DistroError;

/// Settings validation errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("Missing required setting: {field}")]
    MissingField { field: String },

    #[error("Invalid value for setting '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl From<ConfigValidationError> for DistroError {
    fn from(err: ConfigValidationError) -> Self {
        DistroError::Settings {
            message: err.to_string(),
        }
    }
}

/// Require a dotted Java package name such as `org.example.distro`
pub fn validate_package_name(field: &str, package: Option<&str>) -> Result<String, ConfigValidationError> {
    let package = package
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ConfigValidationError::MissingField {
            field: field.to_string(),
        })?;

    for segment in package.split('.') {
        if !is_identifier(segment) {
            return Err(ConfigValidationError::InvalidValue {
                field: field.to_string(),
                reason: format!("'{segment}' is not a valid package segment in '{package}'"),
            });
        }
    }

    Ok(package.to_string())
}

/// Require a non-empty file extension without path separators
pub fn validate_extension(field: &str, extension: &str) -> Result<String, ConfigValidationError> {
    let trimmed = extension.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return Err(ConfigValidationError::InvalidValue {
            field: field.to_string(),
            reason: "extension must not be empty".to_string(),
        });
    }
    if trimmed.contains(['/', '\\']) {
        return Err(ConfigValidationError::InvalidValue {
            field: field.to_string(),
            reason: format!("'{extension}' contains a path separator"),
        });
    }
    Ok(trimmed.to_string())
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
