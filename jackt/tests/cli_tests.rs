//! End-to-end tests for the jackt binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Builds a jackt invocation isolated from the user's configuration.
fn jackt(workdir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jackt"));
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env_remove("JACKT_CONFIG")
        .env_remove("JACKT_VERBOSE")
        .env_remove("RUST_LOG")
        .env("JACKT_NO_COLOR", "true");
    cmd
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Main.jack"),
        "// Entry point\nclass Main {\n   function void main() {\n      do Output.printString(\"Hi\");\n      return;\n   }\n}\n",
    )
    .unwrap();
    fs::write(dir.path().join("Ball.jack"), "class Ball {\n   field int x;\n}\n").unwrap();
    dir
}

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    jackt(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokenize"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_tokenize_single_file_text() {
    let dir = project();
    jackt(dir.path())
        .args(["tokenize", "Main.jack"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2\tkeyword\tclass\n2\tidentifier\tMain\n"))
        .stdout(predicate::str::contains("4\tstringConstant\tHi\n"))
        .stdout(predicate::str::contains("Ball").not());
}

#[test]
fn test_tokenize_directory_in_name_order() {
    let dir = project();
    let output = jackt(dir.path())
        .args(["tokenize", ".", "--by-file"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let ball = stdout.find("# Ball.jack").unwrap();
    let main = stdout.find("# Main.jack").unwrap();
    assert!(ball < main);
    // Global numbering: Main.jack starts after Ball.jack's three lines.
    assert!(stdout.contains("5\tidentifier\tMain\n"));
}

#[test]
fn test_tokenize_json_is_parseable() {
    let dir = project();
    let output = jackt(dir.path())
        .args(["--verbose", "tokenize", ".", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let files = value.as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["file"], "Ball.jack");
    assert_eq!(files[1]["file"], "Main.jack");
    assert_eq!(files[1]["tokens"][0]["lexeme"], "class");
}

#[test]
fn test_tokenize_per_file_line_numbers() {
    let dir = project();
    jackt(dir.path())
        .args(["tokenize", ".", "--line-numbering", "per-file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2\tidentifier\tMain\n"));
}

#[test]
fn test_tokenize_missing_path_fails() {
    let dir = TempDir::new().unwrap();
    jackt(dir.path())
        .args(["tokenize", "Nope.jack"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input path does not exist"));
}

#[test]
fn test_tokenize_unknown_format_fails() {
    let dir = project();
    jackt(dir.path())
        .args(["tokenize", "Main.jack", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format: xml"));
}

#[test]
fn test_tokenize_invalid_utf8_reports_line() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Main.jack"), b"class Main {\n\xff\n}\n").unwrap();

    jackt(dir.path())
        .args(["tokenize", "Main.jack"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read Main.jack at line 2"));
}

#[test]
fn test_config_file_in_current_directory() {
    let dir = project();
    fs::write(dir.path().join("jackt.toml"), "[output]\nformat = \"json\"\n").unwrap();

    jackt(dir.path())
        .args(["tokenize", "Ball.jack"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));

    // Flags override the file.
    jackt(dir.path())
        .args(["tokenize", "Ball.jack", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1\tkeyword\tclass\n"));
}

#[test]
fn test_explicit_config_path() {
    let dir = project();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[tokenizer]\nline_numbering = \"per-file\"\n").unwrap();

    jackt(dir.path())
        .args(["tokenize", "."])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("2\tidentifier\tMain\n"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = project();
    jackt(dir.path())
        .args(["--config", "missing.toml", "tokenize", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_init_then_tokenize() {
    let dir = project();
    jackt(dir.path()).arg("init").assert().success();
    assert!(dir.path().join("jackt.toml").exists());

    jackt(dir.path())
        .args(["tokenize", "Ball.jack"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1\tkeyword\tclass\n"));
}

#[test]
fn test_config_extension_with_leading_dot() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("A.src"), "a\n").unwrap();
    fs::write(dir.path().join("Main.jack"), "class Main {}\n").unwrap();
    fs::write(dir.path().join("jackt.toml"), "[tokenizer]\nextension = \".src\"\n").unwrap();

    jackt(dir.path())
        .args(["tokenize", "."])
        .assert()
        .success()
        .stdout("1\tidentifier\ta\n");
}

#[test]
fn test_empty_unit_warns_without_verbose() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Main.jack"), "// nothing here\n").unwrap();

    jackt(dir.path())
        .args(["tokenize", "."])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No tokens produced from"))
        .stderr(predicate::str::contains("File produced no tokens").not());
}
