// Binary entry point tests
use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bounded_pipeline"))
}

#[test]
fn test_cli_help() {
    let output = binary().arg("--help").output().expect("failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--buffer-size"));
    assert!(stdout.contains("--producer-sleep"));
}

#[test]
fn test_default_run_exits_zero() {
    let output = binary().arg("-q").output().expect("failed to run binary");

    assert!(output.status.success());
}

#[test]
fn test_json_summary() {
    let output = binary()
        .args(["--json", "-b", "10", "-p", "3", "-c", "2", "-e", "50"])
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(summary["produced"], 150);
    assert_eq!(summary["consumed"], 150);
    assert!(summary["high_water_mark"].as_u64().unwrap() <= 10);
    assert_eq!(summary["per_consumer"].as_array().unwrap().len(), 2);
}

#[test]
fn test_zero_buffer_exits_non_zero() {
    let output = binary()
        .args(["-q", "-b", "0"])
        .output()
        .expect("failed to run binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("capacity"));
}
