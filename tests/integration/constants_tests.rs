use crate::common::test_helpers::*;
use distro_tools::constants::{build_model, flatten, generate_constants, render, ConstantDocument};
use distro_tools::DistroError;
use pretty_assertions::assert_eq;

fn table_of(json: &str) -> Vec<(String, String)> {
    let document = ConstantDocument::from_json_str("test.json", json).unwrap();
    let groups = build_model(&[document]).unwrap();
    flatten(&groups)
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_flatten_scalar() {
    assert_eq!(table_of(r#"{"A": {"x": "1"}}"#), pairs(&[("A.x", "1")]));
}

#[test]
fn test_flatten_nested_group() {
    assert_eq!(table_of(r#"{"A": {"B": {"y": "2"}}}"#), pairs(&[("A.B.y", "2")]));
}

#[test]
fn test_flatten_local_reference() {
    assert_eq!(
        table_of(r#"{"A": {"x": "1", "refs": ["x"]}}"#),
        pairs(&[("A.x", "1"), ("A.refs", "1")])
    );
}

#[test]
fn test_flatten_cross_group_reference() {
    assert_eq!(
        table_of(r#"{"A": {"x": "1"}, "B": {"refs": ["A.x", "missing"]}}"#),
        pairs(&[("A.x", "1"), ("B.refs", "1,missing")])
    );
}

#[test]
fn test_large_integers_keep_their_digits() {
    assert_eq!(
        table_of(r#"{"A": {"big": 99999999999999999999, "ratio": 0.5}}"#),
        pairs(&[("A.big", "99999999999999999999"), ("A.ratio", "0.5")])
    );
}

#[test]
fn test_forward_reference_stays_literal() {
    assert_eq!(
        table_of(r#"{"A": {"refs": ["y"], "y": "1"}}"#),
        pairs(&[("A.refs", "y"), ("A.y", "1")])
    );
}

#[test]
fn test_nested_members_resolve_before_parent_lists() {
    // children flatten first, so the parent's list sees them
    assert_eq!(
        table_of(r#"{"A": {"all": ["B.x"], "B": {"x": "7"}}}"#),
        pairs(&[("A.B.x", "7"), ("A.all", "7")])
    );
}

#[test]
fn test_render_source_for_nested_groups() {
    let document = ConstantDocument::from_json_str(
        "programs.json",
        r#"{"Program": {"HIV": "abc", "Outcome": {"DIED": "d-1"}, "all": ["HIV", "Outcome.DIED"]}}"#,
    )
    .unwrap();
    let groups = build_model(&[document]).unwrap();
    let rendered = render(&groups);

    assert_eq!(
        rendered.source,
        "public class Program {\n\n\tpublic static class Outcome {\n\t\tpublic static final String DIED = \"d-1\";\n\t}\n\n\tpublic static final String HIV = \"abc\";\n\tpublic static final String[] all = { HIV, Outcome.DIED };\n}"
    );
    assert_eq!(rendered.table.get("Program.all"), Some("abc,d-1"));
}

#[test]
fn test_malformed_input_writes_nothing() {
    let project = ProjectFixture::new();
    project.write("src/main/distro/constants/good.json", r#"{"A": {"x": "1"}}"#);
    project.write("src/main/distro/constants/scalar.json", r#"{"B": "not a group"}"#);

    let err = generate_constants(&project.constants_settings()).unwrap_err();
    assert!(matches!(err, DistroError::Config { .. }));
    assert!(project.generated_files().is_empty());
}

#[test]
fn test_top_level_scalar_document_writes_nothing() {
    let project = ProjectFixture::new();
    project.write("src/main/distro/constants/scalar.json", r#""just a string""#);

    let err = generate_constants(&project.constants_settings()).unwrap_err();
    match err {
        DistroError::Config { origin, key_path, .. } => {
            assert!(origin.ends_with("scalar.json"));
            assert_eq!(key_path, "<root>");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(project.generated_files().is_empty());
}

#[test]
fn test_duplicate_group_across_files_writes_nothing() {
    let project = ProjectFixture::new();
    project.write("src/main/distro/constants/a.json", r#"{"Program": {"x": "1"}}"#);
    project.write("src/main/distro/constants/b.json", r#"{"Program": {"y": "2"}}"#);

    let err = generate_constants(&project.constants_settings()).unwrap_err();
    match err {
        DistroError::DuplicateGroup { name, first, second } => {
            assert_eq!(name, "Program");
            assert!(first.ends_with("a.json"));
            assert!(second.ends_with("b.json"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(project.generated_files().is_empty());
}

#[test]
fn test_generate_one_class_per_group() {
    let project = ProjectFixture::new();
    project.write(
        "src/main/distro/constants/clinical.json",
        r#"{"EncounterType": {"ADMISSION": "e-1"}, "Program": {"HIV": "p-1", "count": 3, "active": true}}"#,
    );
    project.write(
        "src/main/distro/constants/z_reports.json",
        r#"{"Report": {"programs": ["Program.HIV", "EncounterType.ADMISSION"]}}"#,
    );

    let summary = generate_constants(&project.constants_settings()).unwrap();
    assert_eq!(summary.source_files.len(), 3);
    assert_eq!(summary.property_count, 5);

    assert_eq!(
        project.generated_files(),
        vec![
            std::path::PathBuf::from("target/constants.properties"),
            "target/generated-sources/distro/org/example/distro/EncounterType.java".into(),
            "target/generated-sources/distro/org/example/distro/Program.java".into(),
            "target/generated-sources/distro/org/example/distro/Report.java".into(),
        ]
    );

    let program = project.read("target/generated-sources/distro/org/example/distro/Program.java");
    assert!(program.contains("public static final String count = \"3\";"));
    assert!(program.contains("public static final String active = \"true\";"));

    assert_eq!(
        parse_properties(&project.read("target/constants.properties")),
        pairs(&[
            ("EncounterType.ADMISSION", "e-1"),
            ("Program.HIV", "p-1"),
            ("Program.count", "3"),
            ("Program.active", "true"),
            ("Report.programs", "p-1,e-1"),
        ])
    );
}
