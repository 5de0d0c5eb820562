use crate::error::{DistroError, DistroResult, IoContext};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Common file operation utilities with standardized error handling
pub struct FileUtils;

impl FileUtils {
    /// Fail unless `path` is an existing directory
    pub fn ensure_directory(path: &Path) -> DistroResult<()> {
        if path.is_dir() {
            Ok(())
        } else {
            Err(DistroError::MissingDirectory {
                path: path.to_path_buf(),
            })
        }
    }

    /// Recursively find files under `dir` with the given extension, sorted by path
    pub fn find_files(dir: &Path, extension: &str) -> DistroResult<Vec<PathBuf>> {
        Self::ensure_directory(dir)?;

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| DistroError::Io {
                operation: "directory walk".to_string(),
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf()),
                source: e.into(),
            })?;

            if entry.file_type().is_file() && has_extension(entry.path(), extension) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Read file with the operation recorded for error messages
    pub fn read_with_context(path: &Path, context: &str) -> DistroResult<String> {
        fs::read_to_string(path).io_context(&format!("read {context}"), path)
    }

    /// Write file, creating parent directories first
    pub fn write_with_context(path: &Path, content: &str, context: &str) -> DistroResult<()> {
        Self::ensure_parent_dir(path)?;
        fs::write(path, content).io_context(&format!("write {context}"), path)
    }

    /// Ensure parent directory exists before writing
    pub fn ensure_parent_dir(path: &Path) -> DistroResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).io_context("create parent directory", parent)?;
            }
        }
        Ok(())
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext == extension.trim_start_matches('.'))
}
