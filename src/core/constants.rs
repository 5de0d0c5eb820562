/// String constants shared by the generation goals.
///
/// Defaults follow the conventional distribution project layout, so a project
/// that keeps its configuration under `src/main/distro` needs no settings file.
pub mod defaults {
    pub const CONSTANTS_DIR: &str = "src/main/distro/constants";
    pub const METADATA_DIR: &str = "src/main/distro/metadata";
    pub const OUTPUT_DIR: &str = "target/generated-sources/distro";
    pub const CONSTANTS_FILTER_FILE: &str = "target/constants.properties";
    pub const METADATA_FILTER_FILE: &str = "target/metadata.properties";
    pub const FORMS_EXTENSION: &str = "html";
    pub const SETTINGS_FILE: &str = "distro-tools.toml";
}

/// Input and output file names
pub mod file_names {
    pub const CONCEPTS_XML: &str = "concepts.xml";
    pub const FORMS_XML: &str = "forms.xml";
    pub const METADATA_CLASS: &str = "Metadata";
    pub const SOURCE_EXTENSION: &str = "java";
    pub const CONSTANTS_EXTENSION: &str = "json";
}

/// Metadata reference types
pub mod reference_types {
    pub const CONCEPT: &str = "Concept";
    pub const FORM: &str = "Form";
}

/// Property prefix of the metadata filter file
pub const METADATA_PROPERTY_PREFIX: &str = "metadata.";

/// Element and attribute names in metadata and form XML
pub mod xml_names {
    pub const ITEMS: &str = "items";
    pub const ITEM: &str = "item";
    pub const KEY: &str = "key";
    pub const UUID: &str = "uuid";
    pub const HTMLFORM: &str = "htmlform";
    pub const MACROS: &str = "macros";
}
