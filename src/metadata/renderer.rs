use crate::core::constants::reference_types;
use crate::metadata::config::MetadataConfig;
use crate::output::SourceTemplate;
use indexmap::IndexMap;

/// Render references as `public static final String KEY = "uuid";` lines
/// indented for the nested classes of the metadata template
pub fn render_items_as_constants(items: Option<&IndexMap<String, String>>) -> String {
    let mut out = String::new();
    for (key, uuid) in items.into_iter().flatten() {
        out.push_str(&format!("\t\tpublic static final String {key} = \"{uuid}\";\n"));
    }
    out
}

/// Render the complete metadata source file
pub fn render_metadata_source(package: &str, config: &MetadataConfig) -> String {
    let concepts = render_items_as_constants(config.references_by_type(reference_types::CONCEPT));
    let forms = render_items_as_constants(config.references_by_type(reference_types::FORM));

    SourceTemplate::Metadata.render(&[
        ("PACKAGE", package),
        ("CONCEPTS", concepts.as_str()),
        ("FORMS", forms.as_str()),
    ])
}
