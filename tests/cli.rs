use assert_cmd::Command;
use predicates::prelude::*;

fn sumbench() -> Command {
    Command::cargo_bin("sumbench").expect("Failed to find sumbench binary")
}

#[test]
fn test_default_run_prints_report() {
    sumbench()
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Rust:\nResultado: 5000000050000000\nTempo de execução: \d+\.\d{4} segundos\n$",
        )
        .unwrap());
}

#[test]
fn test_wall_clock_and_label() {
    sumbench()
        .args(["--clock", "wall", "--label", "C"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("C:\nResultado: 5000000050000000\n"));
}

#[test]
fn test_json_output() {
    let output = sumbench()
        .args(["--format", "json"])
        .output()
        .expect("Failed to run sumbench");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["result"], 5_000_000_050_000_000u64);
    assert_eq!(value["n"], 100_000_000u64);
    assert_eq!(value["clock"], "cpu");
    let elapsed = value["elapsed_secs"].as_f64().unwrap();
    assert!(elapsed.is_finite() && elapsed >= 0.0);
}

#[test]
fn test_empty_label_fails() {
    sumbench()
        .args(["--label", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("label must not be empty"));
}

#[test]
fn test_logs_stay_off_stdout() {
    sumbench()
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Rust:\n"))
        .stderr(predicate::str::contains("Summing 1..=100000000"));
}
