// tests/integration/cli_smoke.rs
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::Workspace;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stride_decode"));
    cmd.env_remove("STRIDE_DECODE_INPUT").env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stride_decode"))
        .stdout(predicate::str::contains("--on-invalid-key"));
}

#[test]
fn decodes_file_argument() {
    let ws = Workspace::new();
    let input = ws.write("msg.txt", "3 Brown\n1 The\n5 jumps\n2 quick\n4 fox\n");

    bin().arg(&input).assert().success().stdout("the brown\n");
}

#[test]
fn input_can_come_from_environment() {
    let ws = Workspace::new();
    let input = ws.write("msg.txt", "2 hello\n1 world\n");

    bin().env("STRIDE_DECODE_INPUT", &input).assert().success().stdout("world\n");
}

#[test]
fn dash_reads_stdin() {
    bin().arg("-").write_stdin("1 HELLO\n").assert().success().stdout("hello\n");
}

#[test]
fn empty_file_prints_empty_line() {
    let ws = Workspace::new();
    let input = ws.write("empty.txt", "");

    bin().arg(&input).assert().success().stdout("\n");
}

#[test]
fn missing_file_fails_with_path_in_message() {
    let ws = Workspace::new();
    let missing = ws.path().join("nowhere.txt");

    bin()
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Failed to read file"))
        .stderr(predicate::str::contains("nowhere.txt"));
}

#[test]
fn missing_input_argument_is_a_usage_error() {
    bin().assert().failure().code(2);
}

#[test]
fn invalid_key_fails_by_default() {
    let ws = Workspace::new();
    let input = ws.write("bad.txt", "1 a\nx b\n");

    bin()
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid order key 'x' on line 2"));
}

#[test]
fn invalid_key_can_be_skipped() {
    let ws = Workspace::new();
    let input = ws.write("bad.txt", "1 a\nx b\n2 c\n3 d\n");

    bin()
        .args(["--on-invalid-key", "skip"])
        .arg(&input)
        .assert()
        .success()
        .stdout("a d\n")
        .stderr(predicate::str::contains("skipping line 2"));
}

#[test]
fn quiet_suppresses_skip_warnings() {
    let ws = Workspace::new();
    let input = ws.write("bad.txt", "1 a\nx b\n");

    bin()
        .args(["--on-invalid-key", "skip", "--quiet"])
        .arg(&input)
        .assert()
        .success()
        .stdout("a\n")
        .stderr("");
}

#[test]
fn json_report() {
    let ws = Workspace::new();
    let input = ws.write("msg.txt", "3 a b\n1 x\n2\n");

    let output = bin().args(["--format", "json"]).arg(&input).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["message"], "x");
    assert_eq!(value["lines_read"], 3);
    assert_eq!(value["pairs"], 1);
    assert_eq!(value["malformed_lines"], 2);
    assert_eq!(value["invalid_keys"], 0);
    assert_eq!(value["selected"], 1);
}

#[test]
fn output_flag_writes_file_instead_of_stdout() {
    let ws = Workspace::new();
    let input = ws.write("msg.txt", "2 hello\n1 world\n");
    let target = ws.path().join("decoded.txt");

    bin().arg("-o").arg(&target).arg(&input).assert().success().stdout("");
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "world\n");
}

#[test]
fn bare_carriage_returns_split_lines() {
    let ws = Workspace::new();
    let input = ws.write("mac.txt", "2 quick\r1 the\r3 brown\r");

    bin().arg(&input).assert().success().stdout("the brown\n");
}

#[test]
fn padded_and_grouped_keys_decode_under_fail_policy() {
    let ws = Workspace::new();
    let input = ws.write("keys.txt", "1_0 b\n1\t a\n");

    bin().arg(&input).assert().success().stdout("a\n");
}
