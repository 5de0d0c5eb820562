use distro_tools::config::{ConstantsSettings, FormsSettings, MetadataSettings};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Shared test utilities to reduce duplication across test files
pub mod test_helpers {
    use super::*;

    /// A throwaway distribution project laid out like a real one
    pub struct ProjectFixture {
        temp_dir: TempDir,
    }

    impl ProjectFixture {
        pub fn new() -> Self {
            Self {
                temp_dir: TempDir::new().expect("Failed to create temp dir"),
            }
        }

        pub fn root(&self) -> &Path {
            self.temp_dir.path()
        }

        pub fn path(&self, relative: &str) -> PathBuf {
            self.root().join(relative)
        }

        /// Write a file, creating parent directories
        pub fn write(&self, relative: &str, content: &str) -> PathBuf {
            let path = self.path(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create fixture directory");
            }
            fs::write(&path, content).expect("Failed to write fixture file");
            path
        }

        pub fn read(&self, relative: &str) -> String {
            fs::read_to_string(self.path(relative)).expect("Failed to read generated file")
        }

        pub fn constants_settings(&self) -> ConstantsSettings {
            ConstantsSettings {
                input_dir: self.path("src/main/distro/constants"),
                output_dir: self.path("target/generated-sources/distro"),
                package: Some("org.example.distro".to_string()),
                filter_file: self.path("target/constants.properties"),
            }
        }

        pub fn metadata_settings(&self) -> MetadataSettings {
            MetadataSettings {
                input_dir: self.path("src/main/distro/metadata"),
                output_dir: self.path("target/generated-sources/distro"),
                package: Some("org.example.distro".to_string()),
                filter_file: self.path("target/metadata.properties"),
            }
        }

        pub fn forms_settings(&self) -> FormsSettings {
            FormsSettings {
                forms_dir: Some(self.path("src/main/distro/forms")),
                ..FormsSettings::default()
            }
        }

        /// Every file under `target/`, relative to the project root
        pub fn generated_files(&self) -> Vec<PathBuf> {
            let target = self.path("target");
            if !target.exists() {
                return Vec::new();
            }
            let mut files: Vec<PathBuf> = walkdir::WalkDir::new(&target)
                .into_iter()
                .filter_map(Result::ok)
                .filter(|e| e.file_type().is_file())
                .map(|e| e.path().strip_prefix(self.root()).unwrap().to_path_buf())
                .collect();
            files.sort();
            files
        }
    }

    /// Split a properties file into `(key, value)` pairs
    pub fn parse_properties(text: &str) -> Vec<(String, String)> {
        text.lines()
            .filter_map(|line| line.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}
