use crate::common::test_helpers::*;
use distro_tools::metadata::{generate_metadata, load_from_directory};
use distro_tools::DistroError;
use pretty_assertions::assert_eq;

const CONCEPTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<items>
    <item key="YES" uuid="1065AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA" />
    <item key="NO" uuid="1066AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA" />
</items>
"#;

const FORMS: &str = r#"<items>
    <item key="ADMISSION" uuid="f0000000-0000-0000-0000-000000000001" />
</items>
"#;

#[test]
fn test_generate_metadata_class_and_properties() {
    let project = ProjectFixture::new();
    project.write("src/main/distro/metadata/concepts.xml", CONCEPTS);
    project.write("src/main/distro/metadata/forms.xml", FORMS);

    let summary = generate_metadata(&project.metadata_settings()).unwrap();
    assert_eq!(summary.property_count, 3);

    let source = project.read("target/generated-sources/distro/org/example/distro/Metadata.java");
    assert!(source.starts_with("package org.example.distro;"));
    assert!(source.contains(
        "\tpublic static class Concepts {\n\t\tpublic static final String YES = \"1065AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA\";\n\t\tpublic static final String NO = \"1066AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA\";\n\t}"
    ));
    assert!(source.contains(
        "\tpublic static class Forms {\n\t\tpublic static final String ADMISSION = \"f0000000-0000-0000-0000-000000000001\";\n\t}"
    ));

    assert_eq!(
        parse_properties(&project.read("target/metadata.properties")),
        vec![
            ("metadata.concept.YES".to_string(), "1065AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA".to_string()),
            ("metadata.concept.NO".to_string(), "1066AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA".to_string()),
            ("metadata.form.ADMISSION".to_string(), "f0000000-0000-0000-0000-000000000001".to_string()),
        ]
    );
}

#[test]
fn test_missing_reference_files_produce_empty_classes() {
    let project = ProjectFixture::new();
    std::fs::create_dir_all(project.path("src/main/distro/metadata")).unwrap();

    let summary = generate_metadata(&project.metadata_settings()).unwrap();
    assert_eq!(summary.property_count, 0);

    let source = project.read("target/generated-sources/distro/org/example/distro/Metadata.java");
    assert!(source.contains("\tpublic static class Concepts {\n\t}"));
    assert_eq!(project.read("target/metadata.properties"), "");
}

#[test]
fn test_configured_types_are_alphabetical() {
    let project = ProjectFixture::new();
    project.write("metadata/forms.xml", FORMS);
    project.write("metadata/concepts.xml", CONCEPTS);

    let config = load_from_directory(&project.path("metadata")).unwrap();
    assert_eq!(config.configured_types().collect::<Vec<_>>(), vec!["Concept", "Form"]);
}

#[test]
fn test_invalid_item_fails_before_writing() {
    let project = ProjectFixture::new();
    project.write(
        "src/main/distro/metadata/concepts.xml",
        r#"<items><item uuid="no-key"/></items>"#,
    );

    let err = generate_metadata(&project.metadata_settings()).unwrap_err();
    assert!(matches!(err, DistroError::Config { .. }));
    assert!(project.generated_files().is_empty());
}

#[test]
fn test_missing_metadata_directory() {
    let project = ProjectFixture::new();
    let err = generate_metadata(&project.metadata_settings()).unwrap_err();
    assert!(matches!(err, DistroError::MissingDirectory { .. }));
}
