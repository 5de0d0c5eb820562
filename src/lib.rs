//! # distro-tools
//!
//! Build-time code generation for distribution configuration.
//!
//! distro-tools reads directories of JSON and XML configuration describing
//! constant hierarchies and metadata references, and generates source classes
//! and matching property files for use later in a build. It also validates
//! form definitions, stripping comments and expanding their macros.
//!
//! ## Core Features
//!
//! - **Constant Hierarchies**: Nested JSON groups become nested classes
//! - **Flattened References**: Dotted `Group.member=value` properties with list
//!   elements resolved against earlier constants
//! - **Metadata References**: Concept and form uuids as a `Metadata` class
//! - **Form Validation**: Well-formedness, comment stripping and macro expansion
//!
//! ## Quick Start
//!
//! ```rust
//! use distro_tools::{build_model, render, ConstantDocument};
//!
//! let document = ConstantDocument::from_json_str(
//!     "programs.json",
//!     r#"{"Program": {"HIV": "1", "all": ["HIV"]}}"#,
//! )?;
//! let groups = build_model(&[document])?;
//! let rendered = render(&groups);
//!
//! assert_eq!(rendered.table.get("Program.all"), Some("1"));
//! assert!(rendered.source.starts_with("public class Program {"));
//! # Ok::<(), distro_tools::DistroError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`constants`] - Constant model, flattening and class rendering
//! - [`metadata`] - Metadata reference loading and rendering
//! - [`forms`] - Form validation and macro expansion
//! - [`output`] - Source templates and generated file placement
//! - [`config`] - Settings file and validation
//! - [`cli`] - Command-line interface and argument parsing

/// Command-line interface and argument parsing
pub mod cli;
/// Settings management and validation
pub mod config;
/// Constant hierarchies, flattening and rendering
pub mod constants;
/// Shared constants and file utilities
pub mod core;
/// Error types and handling utilities
pub mod error;
/// Form validation
pub mod forms;
/// Metadata references
pub mod metadata;
/// Generated file output
pub mod output;

pub use config::ToolConfig;
pub use constants::{
    build_model, flatten, generate_constants, load_documents, render, render_group,
    ConfigValue, ConstantDocument, ConstantGroup, ConstantValue, FlatReferenceTable,
    RenderedConstants,
};
pub use error::{DistroError, DistroResult};
pub use forms::{validate_form, validate_forms, FormReport, FormValidator};
pub use metadata::{generate_metadata, MetadataConfig};
pub use output::GenerationSummary;
