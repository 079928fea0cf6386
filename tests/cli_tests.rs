//! Integration tests for the colourparam CLI
//!
//! These tests run the binary in an isolated directory and check exit codes
//! and output.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run colourparam with no config visible unless one is written into `dir`.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_colourparam"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir)
        .env_remove("COLOURPARAM_LOG")
        .output()
        .expect("Failed to execute colourparam")
}

fn run(args: &[&str]) -> Output {
    let temp = TempDir::new().expect("should create temp dir");
    run_in(temp.path(), args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_parse_name() {
    let output = run(&["parse", "Lawn Green"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "lawn green\nRGBA{R: 0x7c, G: 0xfc, B: 0x00, A: 0xff}\n");
}

#[test]
fn test_parse_literal() {
    let output = run(&["parse", "RGB{R: 0xf}"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "RGBA{R: 0x0f, G: 0x00, B: 0x00, A: 0xff}\n");
}

#[test]
fn test_parse_with_families_order() {
    let output = run(&["parse", "green", "-f", "x11,web"]);
    assert!(stdout(&output).contains("G: 0xff"));

    let output = run(&["parse", "green", "-f", "web,x11"]);
    assert!(stdout(&output).contains("G: 0x80"));
}

#[test]
fn test_parse_unknown_name_suggests() {
    let output = run(&["parse", "law green"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output)
        .contains("did you mean \"lawn green\", \"lawngreen\" or \"low green\"?"));
}

#[test]
fn test_parse_json() {
    let output = run(&["parse", "red", "--format", "json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(json["valid"], true);
    assert_eq!(json["name"], "red");
    assert_eq!(json["rgba"]["r"], 255);
    assert_eq!(json["literal"], "RGBA{R: 0xff, G: 0x00, B: 0x00, A: 0xff}");

    let output = run(&["parse", "RGB{R: xxx}", "--format", "json"]);
    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(json["valid"], false);
}

#[test]
fn test_bad_family_list_is_invalid_args() {
    let output = run(&["parse", "red", "-f", "x11,x11"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("appears 2 times"));

    let output = run(&["parse", "red", "-f", "pantne"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("did you mean \"pantone\"?"));
}

#[test]
fn test_pair() {
    let output = run(&["pair", "white;RGB{A: 0x80}"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "white;RGBA{R: 0x00, G: 0x00, B: 0x00, A: 0x80}\n");

    let output = run(&["pair", "white"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("missing ';'"));
}

#[test]
fn test_families_list_and_show() {
    let output = run(&["families", "list"]);
    assert!(output.status.success());
    let out = stdout(&output);
    for id in ["standard", "web", "x11", "cga", "crayola", "pantone", "farrow-and-ball", "any"] {
        assert!(out.contains(id), "missing {id}");
    }
    assert!(out.contains("fnb"));

    let output = run(&["families", "show", "cga"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("light magenta => RGBA{R: 0xff, G: 0x55, B: 0xff, A: 0xff}"));

    let output = run(&["families", "show", "fnb"]);
    assert!(stdout(&output).contains("Family: farrow-and-ball"));

    let output = run(&["families", "show", "crayon"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_check_families_reports_all_problems() {
    let output = run(&["check-families", "any,cga,cga,nonesuch"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("3 problem(s) found:"), "{err}");
    assert!(err.contains("\"nonesuch\" is not a valid family"));
    assert!(err.contains("\"cga\" appears 2 times"));
    assert!(err.contains("wildcard family"));

    let output = run(&["check-families", "x11, fnb"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "OK: x11, farrow-and-ball\n");
}

#[test]
fn test_describe() {
    let output = run(&["describe", "-f", "x11"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Either a colour name in the x11 colour-name family"));
}

#[test]
fn test_config_families_aliases_and_params() {
    let temp = TempDir::new().expect("should create temp dir");
    fs::write(
        temp.path().join("colourparam.toml"),
        r#"
[aliases]
corp = ["brand", "web"]

[[family]]
name = "brand"
[family.colours]
"signal red" = "RGB{R: 0xe1, G: 0x06, B: 0x00}"

[params.background]
families = ["corp"]
"#,
    )
    .expect("should write config");

    let output = run_in(temp.path(), &["parse", "signal red", "-f", "corp"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("R: 0xe1"));

    let output = run_in(temp.path(), &["parse", "teal", "--param", "background"]);
    assert!(output.status.success());

    let output = run_in(temp.path(), &["parse", "teal", "--param", "backgroud"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("did you mean \"background\"?"));

    let output = run_in(temp.path(), &["check-config"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("params:   1"));
}

#[test]
fn test_check_config_reports_problems() {
    let temp = TempDir::new().expect("should create temp dir");
    let path = temp.path().join("bad.toml");
    fs::write(&path, "[aliases]\nweb = [\"x11\"]\n\n[params.a]\nfamilies = [\"cga\", \"cga\"]\n")
        .expect("should write config");

    let output = run_in(temp.path(), &["check-config", path.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Config validation failed"));
    assert!(err.contains("'aliases'"));
    assert!(err.contains("'params.a.families'"));
}

#[test]
fn test_check_config_without_file() {
    let output = run(&["check-config"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No colourparam.toml found"));
}

#[test]
fn test_invalid_arguments() {
    let output = run(&["parse"]);
    assert_eq!(output.status.code(), Some(2));

    let output = run(&["parse", "red", "-f", "web", "-p", "background"]);
    assert_eq!(output.status.code(), Some(2));
}
