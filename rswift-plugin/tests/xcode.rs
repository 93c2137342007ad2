//! IDE-project builds and snapshot loading through `rswift_plugin::run`.

use std::fs;
use std::path::PathBuf;

use rswift_plugin::{
    BuildContext, PluginContext, XcodeProduct, XcodeTarget, create_xcode_build_commands,
};
use tempfile::TempDir;

const TOOL: &str = "/opt/rswift/bin/rswift";

#[test]
fn fixed_arguments_regardless_of_filesystem() {
    let work = TempDir::new().unwrap();
    // Config files next to the work dir must have no effect in this mode.
    fs::write(
        work.path().join("rswift.json"),
        r#"{"generators": ["color"]}"#,
    )
    .unwrap();
    fs::write(work.path().join(".rswiftignore"), "").unwrap();

    let ctx = PluginContext::new(work.path()).with_tool("rswift", TOOL);
    let target = XcodeTarget {
        display_name: "MyApp".to_string(),
        product: Some(XcodeProduct {
            kind: "application".to_string(),
        }),
    };

    let commands = create_xcode_build_commands(&ctx, &target).unwrap();
    assert_eq!(commands.len(), 1);
    let command = &commands[0];

    let output = work
        .path()
        .join("MyApp")
        .join("Resources")
        .join("R.generated.swift");
    assert_eq!(
        command.arguments,
        vec![
            "generate".to_string(),
            output.display().to_string(),
            "--target".to_string(),
            "MyApp".to_string(),
            "--input-type".to_string(),
            "xcodeproj".to_string(),
            "--bundle-source".to_string(),
            "finder".to_string(),
            "--generators".to_string(),
            "image,string".to_string(),
        ]
    );
    assert_eq!(command.output_files, vec![output]);
    assert_eq!(command.executable, PathBuf::from(TOOL));
    assert_eq!(
        command.display_name,
        "R.swift generate resources for application MyApp"
    );
    assert!(work.path().join("MyApp").join("Resources").is_dir());
}

#[test]
fn run_generic_from_json_snapshot() {
    let work = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("rswift.json"),
        r#"{"generators": ["image"]}"#,
    )
    .unwrap();

    let snapshot = project.path().join("target.json");
    let json = serde_json::json!({
        "type": "source_module",
        "name": "Feature",
        "kind": "test",
        "directory": project.path(),
        "files": [
            { "path": "icons.xcassets", "type": "resource" },
            { "path": "FeatureTests.swift", "type": "source" }
        ]
    });
    fs::write(&snapshot, json.to_string()).unwrap();

    let ctx = PluginContext::new(work.path()).with_tool("rswift", TOOL);
    let commands = rswift_plugin::run(BuildContext::Generic, &snapshot, &ctx).unwrap();
    assert_eq!(commands.len(), 1);
    let args = &commands[0].arguments;
    assert_eq!(args[4..8], ["--bundle-source", "finder", "--input-files", "icons.xcassets"]);
    assert_eq!(args[8..], ["--generators", "image"]);
}

#[test]
fn run_xcode_from_toml_snapshot() {
    let work = TempDir::new().unwrap();
    let snapshot = work.path().join("target.toml");
    fs::write(&snapshot, "display_name = \"Widgets\"\n").unwrap();

    let ctx = PluginContext::new(work.path()).with_tool("rswift", TOOL);
    let commands = rswift_plugin::run(BuildContext::Xcode, &snapshot, &ctx).unwrap();
    assert_eq!(commands.len(), 1);
    assert_eq!(
        commands[0].display_name,
        "R.swift generate resources for Widgets"
    );
    assert_eq!(commands[0].arguments[2..4], ["--target", "Widgets"]);
}

#[test]
fn run_with_missing_snapshot_fails() {
    let work = TempDir::new().unwrap();
    let ctx = PluginContext::new(work.path()).with_tool("rswift", TOOL);
    let err = rswift_plugin::run(BuildContext::Xcode, &work.path().join("nope.json"), &ctx)
        .expect_err("missing snapshot should fail");
    assert!(
        format!("{err:#}").contains("nope.json"),
        "unexpected error: {err:#}"
    );
}

#[test]
fn command_serializes_for_the_host() {
    let work = TempDir::new().unwrap();
    let ctx = PluginContext::new(work.path()).with_tool("rswift", TOOL);
    let target = XcodeTarget {
        display_name: "MyApp".to_string(),
        product: None,
    };
    let commands = create_xcode_build_commands(&ctx, &target).unwrap();
    let value = serde_json::to_value(&commands).unwrap();
    assert_eq!(value[0]["executable"], TOOL);
    assert_eq!(value[0]["arguments"][0], "generate");
    assert_eq!(value[0]["output_files"].as_array().map(Vec::len), Some(1));
}
