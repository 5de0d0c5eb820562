use crate::common::test_helpers::*;
use distro_tools::config::ToolConfig;
use std::process::{Command, Output};

fn distro_tools(project: &ProjectFixture, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_distro-tools"))
        .args(args)
        .current_dir(project.root())
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run distro-tools")
}

#[test]
fn test_config_init_then_generate_with_defaults() {
    let project = ProjectFixture::new();

    let output = distro_tools(&project, &["config", "init"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let config = ToolConfig::from_file(&project.path("distro-tools.toml")).unwrap();
    assert_eq!(config, ToolConfig::default());

    project.write(
        "src/main/distro/constants/programs.json",
        r#"{"Program": {"HIV": "p-1", "all": ["HIV"]}}"#,
    );
    let output = distro_tools(
        &project,
        &["generate-constants", "--package", "org.example.distro"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("generate-constants"));

    assert_eq!(
        project.read("target/constants.properties"),
        "Program.HIV=p-1\nProgram.all=p-1\n"
    );
    assert!(project
        .path("target/generated-sources/distro/org/example/distro/Program.java")
        .is_file());
}

#[test]
fn test_settings_file_supplies_package() {
    let project = ProjectFixture::new();
    project.write(
        "settings/tools.toml",
        r#"
[metadata]
package = "org.example.meta"
input_dir = "meta"
"#,
    );
    project.write("meta/concepts.xml", r#"<items><item key="YES" uuid="c-1"/></items>"#);

    let output = distro_tools(
        &project,
        &["--config", "settings/tools.toml", "generate-metadata"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(project
        .path("target/generated-sources/distro/org/example/meta/Metadata.java")
        .is_file());
    assert_eq!(project.read("target/metadata.properties"), "metadata.concept.YES=c-1\n");
}

#[test]
fn test_missing_package_fails() {
    let project = ProjectFixture::new();
    project.write("src/main/distro/constants/a.json", r#"{"A": {"x": "1"}}"#);

    let output = distro_tools(&project, &["generate-constants"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("constants.package"));
    assert!(project.generated_files().is_empty());
}

#[test]
fn test_validate_forms_command() {
    let project = ProjectFixture::new();
    project.write(
        "forms/intake.html",
        "<htmlform><macros>w=5089</macros><obs conceptId=\"$w\"/></htmlform>",
    );

    let output = distro_tools(
        &project,
        &["validate-forms", "--forms-dir", "forms", "--output-dir", "target/forms"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        project.read("target/forms/intake.html"),
        "<htmlform><obs conceptId=\"5089\"/></htmlform>"
    );

    project.write("forms/bad.html", "<form/>");
    let output = distro_tools(&project, &["validate-forms", "--forms-dir", "forms"]);
    assert!(!output.status.success());
}
