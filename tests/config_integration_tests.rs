//! Integration tests for the `config` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn validate_reports_missing_file() {
    let fixture = TestFixture::new();

    plainviz!()
        .current_dir(fixture.path())
        .args(["--color", "never", "config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn validate_rejects_bad_theme() {
    let fixture = TestFixture::new();
    fixture.create_config("[render]\ntheme = \"neon\"\n");

    plainviz!()
        .current_dir(fixture.path())
        .args(["--color", "never", "config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config"));
}

#[test]
fn validate_rejects_empty_palette_entry() {
    let fixture = TestFixture::new();
    fixture.create_config("[render]\ncolors = [\"#fff\", \" \"]\n");

    plainviz!()
        .current_dir(fixture.path())
        .args(["--color", "never", "config", "validate"])
        .assert()
        .code(2);
}

#[test]
fn show_text_names_source() {
    let fixture = TestFixture::new();
    fixture.create_config("[render]\nwidth = 720\n");

    plainviz!()
        .current_dir(fixture.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".plainviz.toml"))
        .stdout(predicate::str::contains("width = 720"));
}

#[test]
fn show_json_is_parseable() {
    let fixture = TestFixture::new();
    fixture.create_config("[embed]\nclass_name = \"chart\"\n");

    let output = plainviz!()
        .current_dir(fixture.path())
        .args(["config", "show", "-f", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["embed"]["class_name"], "chart");
    assert_eq!(value["render"]["width"], 500.0);
}
