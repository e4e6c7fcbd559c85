//! End-to-end checks against the built `binary-partition` binary.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_binary-partition"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run binary-partition")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn prints_sequence_then_result() {
    let output = run(&["128", "0", "1", "0", "1", "1", "0", "0"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "[0 1 0 1 1 0 0]\n44\n");
}

#[test]
fn non_convergence_exits_with_one() {
    let output = run(&["16", "0", "0", "1", "0", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "[0 0 1 0 1]\nrange does not converge: 3 <-> 2\n"
    );
}

#[test]
fn invalid_indicator_exits_with_one() {
    let output = run(&["8", "1", "2", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("invalid indicator 2 at position 1"));
}

#[test]
fn strict_mode_rejects_extra_indicators() {
    let output = run(&["--strict", "16", "0", "0", "1", "0", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("expected 4 indicators for this range, got 5"));
}

#[test]
fn decodes_symbol_sequences() {
    let output = run(&["--symbols", "FB", "128", "FBFBBFF"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "[0 1 0 1 1 0 0]\n44\n");
}

#[test]
fn symbol_tokens_are_joined_with_spaces() {
    let output = run(&["--symbols", "FB", "128", "FBF", "BBFF"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "[0 1 0 1 1 0 0]\n44\n");
}

#[test]
fn invalid_symbol_position_counts_the_separator() {
    let output = run(&["--symbols", "FB", "128", "FB", "X"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "invalid symbol 'X' at position 3\n");
}

#[test]
fn trace_prints_every_step() {
    let output = run(&["--trace", "8", "1", "0", "1"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "[1 0 1]\nstart: [0, 7]\nstep 1: 1 -> [4, 7]\nstep 2: 0 -> [4, 5]\nstep 3: 1 -> [5, 5]\n5\n"
    );
}

#[test]
fn locate_prints_indicators() {
    let output = run(&["--locate", "5", "--symbols", "LR", "8"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "[1 0 1]\nRLR\n");
}

#[test]
fn missing_sequence_is_a_usage_error() {
    let output = run(&["8"]);
    assert_eq!(output.status.code(), Some(2));
}
