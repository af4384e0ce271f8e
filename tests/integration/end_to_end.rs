// tests/integration/end_to_end.rs
use stride_decode::{
    app,
    config::{Config, OutputFormat},
};
use stride_decode_domain::InvalidKeyPolicy;

use crate::common::Workspace;

fn decode_to_file(ws: &Workspace, input: std::path::PathBuf) -> (stride_decode_usecase::DecodeReport, String) {
    let target = ws.path().join("out.txt");
    let config = Config { output: Some(target.clone()), ..Config::for_file(input) };
    let report = app::run(&config).expect("run succeeds");
    (report, std::fs::read_to_string(target).unwrap())
}

#[test]
fn long_message_uses_triangular_positions() {
    let ws = Workspace::new();
    let words = ["i", "x", "love", "x", "x", "computers", "x", "x", "x", "and", "x", "x", "x", "x", "puzzles"];
    // Shuffle the keys so the file order differs from the sorted order.
    let pairs: Vec<(i64, &str)> = words.iter().enumerate().rev().map(|(i, w)| (i as i64 * 3 + 7, *w)).collect();
    let input = ws.write_pairs("long.txt", &pairs);

    let (report, written) = decode_to_file(&ws, input);
    assert_eq!(report.message, "i love computers and puzzles");
    assert_eq!(report.selected, 5);
    assert_eq!(written, "i love computers and puzzles\n");
}

#[test]
fn crlf_and_blank_lines_are_tolerated() {
    let ws = Workspace::new();
    let input = ws.write("crlf.txt", "2 Quick\r\n\r\n1 The\r\n3 BROWN\r\n");

    let (report, _) = decode_to_file(&ws, input);
    assert_eq!(report.message, "the brown");
    assert_eq!(report.lines_read, 3);
    assert_eq!(report.malformed_lines, 0);
}

#[test]
fn skip_policy_through_config() {
    let ws = Workspace::new();
    let input = ws.write("mixed.txt", "1 a\nfoo bar\n2 b\n");
    let target = ws.path().join("out.json");
    let config = Config {
        policy: InvalidKeyPolicy::Skip,
        format: OutputFormat::Json,
        output: Some(target.clone()),
        ..Config::for_file(input)
    };

    let report = app::run(&config).unwrap();
    assert_eq!(report.invalid_keys, 1);

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(target).unwrap()).unwrap();
    assert_eq!(value["message"], "a");
}

#[test]
fn missing_input_is_reported_not_panicked() {
    let ws = Workspace::new();
    let config = Config::for_file(ws.path().join("absent.txt"));
    let err = app::run(&config).unwrap_err();
    assert!(err.to_string().contains("absent.txt"));
}
