//! Integration tests for `parse`, `render` and the global flags.

mod common;

use common::{BAR_CHART, MULTI_SERIES_LINE, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Parse Command
// =============================================================================

#[test]
fn parse_prints_ir_json() {
    let fixture = TestFixture::new();
    let input = fixture.create_file("chart.pv", BAR_CHART);

    let output = plainviz!()
        .current_dir(fixture.path())
        .args(["parse", input.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["type"], "bar");
    assert_eq!(value["title"], "Fruit Sales");
    assert_eq!(value["labels"].as_array().unwrap().len(), 3);
}

#[test]
fn parse_reads_stdin() {
    plainviz!()
        .args(["parse", "-"])
        .write_stdin("Type: pie\nA: 1\nB: 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"pie\""));
}

#[test]
fn parse_multi_series_carries_legend_names() {
    plainviz!()
        .arg("parse")
        .write_stdin(MULTI_SERIES_LINE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"2023\""))
        .stdout(predicate::str::contains("\"name\": \"2024\""));
}

#[test]
fn parse_failure_lists_every_problem() {
    plainviz!()
        .args(["--color", "never", "parse"])
        .write_stdin("Type: pizza\nA = 1\nB: lots\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Parse: 3 problems found"))
        .stderr(predicate::str::contains("Line 1: Unknown chart type \"pizza\""))
        .stderr(predicate::str::contains("Use ':' instead of '='"))
        .stderr(predicate::str::contains("help: Try: A : 1"));
}

#[test]
fn parse_empty_document_reports_no_data() {
    plainviz!()
        .args(["--color", "never", "parse"])
        .write_stdin("# just a comment\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No data points found"));
}

#[test]
fn parse_missing_file_is_io_error() {
    plainviz!()
        .args(["--color", "never", "parse", "does-not-exist.pv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("FileRead"));
}

// =============================================================================
// Render Command
// =============================================================================

#[test]
fn render_prints_svg() {
    plainviz!()
        .args(["--no-config", "render"])
        .write_stdin(BAR_CHART)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"))
        .stdout(predicate::str::contains("Fruit Sales"))
        .stdout(predicate::str::contains("</svg>"));
}

#[test]
fn render_every_chart_type() {
    for chart in ["bar", "line", "pie", "area", "donut"] {
        plainviz!()
            .args(["--no-config", "render"])
            .write_stdin(format!("Type: {chart}\nA: 10\nB: 20\nC: 30\n"))
            .assert()
            .success()
            .stdout(predicate::str::contains("<svg"));
    }
}

#[test]
fn render_writes_output_file() {
    let fixture = TestFixture::new();
    let input = fixture.create_file("chart.pv", BAR_CHART);

    plainviz!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", input.to_str().unwrap(), "-o", "out/chart.svg"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let svg = fixture.read("out/chart.svg");
    assert_eq!(svg.matches("class=\"pv-bar\"").count(), 3);
}

#[test]
fn render_is_deterministic() {
    let run = || {
        plainviz!()
            .args(["--no-config", "render"])
            .write_stdin(MULTI_SERIES_LINE)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn render_size_flags_set_canvas() {
    plainviz!()
        .args(["--no-config", "render", "--width", "800", "--height", "400"])
        .write_stdin(BAR_CHART)
        .assert()
        .success()
        .stdout(predicate::str::contains("viewBox=\"0 0 800 400\""));
}

#[test]
fn render_theme_flag_beats_document_theme() {
    plainviz!()
        .args(["--no-config", "render", "--theme", "light"])
        .write_stdin("Theme: dark\nA: 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("#eff1f5"));
}

#[test]
fn render_json_envelope() {
    plainviz!()
        .args(["--no-config", "render", "-f", "json"])
        .write_stdin(BAR_CHART)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ok\": true"))
        .stdout(predicate::str::contains("\"svg\": \"<svg"));
}

#[test]
fn render_json_envelope_with_errors() {
    plainviz!()
        .args(["--no-config", "render", "-f", "json"])
        .write_stdin("Apples 50\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"ok\": false"))
        .stdout(predicate::str::contains("Missing ':' separator"));
}

#[test]
fn render_zero_total_pie_fails() {
    plainviz!()
        .args(["--no-config", "--color", "never", "render"])
        .write_stdin("Type: pie\nA: 0\nB: 0\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Render:"));
}

#[test]
fn render_from_ir_json() {
    let ir = plainviz!()
        .arg("parse")
        .write_stdin("Type: donut\nA: 1\nB: 3\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    plainviz!()
        .args(["--no-config", "render", "--ir"])
        .write_stdin(ir)
        .assert()
        .success()
        .stdout(predicate::str::contains("class=\"pv-slice\""));
}

#[test]
fn render_bad_ir_json_fails() {
    plainviz!()
        .args(["--no-config", "--color", "never", "render", "--ir"])
        .write_stdin("Type: bar\nA: 1\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IR:"));
}

#[test]
fn render_uses_local_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[render]\nwidth = 640\nheight = 480\n");

    plainviz!()
        .current_dir(fixture.path())
        .arg("render")
        .write_stdin(BAR_CHART)
        .assert()
        .success()
        .stdout(predicate::str::contains("viewBox=\"0 0 640 480\""));
}

#[test]
fn no_config_ignores_local_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[render]\nwidth = 640\n");

    plainviz!()
        .current_dir(fixture.path())
        .args(["--no-config", "render"])
        .write_stdin(BAR_CHART)
        .assert()
        .success()
        .stdout(predicate::str::contains("viewBox=\"0 0 500 300\""));
}

#[test]
fn broken_config_exits_with_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config("[render\nwidth = ");

    plainviz!()
        .current_dir(fixture.path())
        .args(["--color", "never", "render"])
        .write_stdin(BAR_CHART)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn help_lists_subcommands() {
    plainviz!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("embed"));
}

#[test]
fn unknown_subcommand_fails() {
    plainviz!().arg("draw").assert().failure();
}

#[test]
fn color_never_has_no_escape_codes() {
    plainviz!()
        .args(["--color", "never", "parse"])
        .write_stdin("oops\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn color_always_emits_escape_codes() {
    plainviz!()
        .args(["--color", "always", "parse"])
        .write_stdin("oops\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\u{1b}["));
}
