// main.rsとエントリーポイントのテスト
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_chan_patterns"))
}

#[test]
fn test_cli_help() {
    let output = binary().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("queue"));
    assert!(stdout.contains("fan-in"));
}

#[test]
fn test_queue_command_output() {
    let output = binary()
        .args(["queue", "--items", "2", "--consumers", "2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    for item in ["ProdA-item-1", "ProdA-item-2", "ProdB-item-1", "ProdB-item-2"] {
        assert!(lines.iter().any(|line| line.ends_with(&format!("produced {item}"))));
        assert_eq!(
            lines
                .iter()
                .filter(|line| line.ends_with(&format!("processing {item}")))
                .count(),
            1
        );
    }
    assert!(lines.contains(&"Consumer 1 finished"));
    assert!(lines.contains(&"Consumer 2 finished"));
    assert_eq!(lines.last(), Some(&"All consumers finished. Exiting."));
}

#[test]
fn test_quiet_flag_suppresses_progress() {
    let output = binary()
        .args(["queue", "--items", "1", "--quiet"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_config_file_is_applied() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("scenario.json");
    fs::write(
        &path,
        r#"{ "fan_in": { "workers": 1, "max_delay_ms": 10, "timeout_ms": 500, "receives": 1 } }"#,
    )
    .unwrap();

    let output = binary()
        .arg("fan-in")
        .arg("--config")
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Worker 1 finished in"));
    assert_eq!(lines[1], "Main finished");
}

#[test]
fn test_invalid_override_fails() {
    let output = binary()
        .args(["queue", "--consumers", "0"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_missing_config_file_fails() {
    let output = binary()
        .args(["--config", "/nonexistent/scenario.json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
