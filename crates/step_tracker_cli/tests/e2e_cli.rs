use std::process::{Command, Output};

fn step_tracker(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_step-tracker"))
        .args(args)
        .env_remove("STEP_TRACKER_WEIGHT_KG")
        .env_remove("STEP_TRACKER_HEIGHT")
        .env("STEP_TRACKER_LOG_LEVEL", "warn")
        .output()
        .expect("spawn step-tracker")
}

#[test]
fn day_prints_three_line_report() {
    let out = step_tracker(&["--weight", "70", "--height", "175", "day", "5000,1h"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.contains("Количество шагов: 5000."));
    assert!(stdout.contains("3.25"));
}

#[test]
fn day_bad_record_succeeds_silently_with_diagnostic() {
    let out = step_tracker(&["--weight", "70", "--height", "175", "day", "-5,1h"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("activity record rejected"));
}

#[test]
fn training_prints_five_line_report() {
    let out = step_tracker(&["training", "5000,Бег,1h", "--weight", "70", "--height", "175"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Тип тренировки: Бег");
    assert_eq!(lines[1], "Длительность: 1.00 ч.");
}

#[test]
fn training_unknown_activity_exits_non_zero() {
    let out = step_tracker(&["--weight", "70", "--height", "175", "training", "5000,Плавание,1h"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("unknown activity kind"));
}

#[test]
fn profile_read_from_environment() {
    let out = Command::new(env!("CARGO_BIN_EXE_step-tracker"))
        .args(["--json", "day", "6000,30m"])
        .env("STEP_TRACKER_WEIGHT_KG", "80")
        .env("STEP_TRACKER_HEIGHT", "1.7")
        .env("STEP_TRACKER_LOG_LEVEL", "warn")
        .output()
        .expect("spawn step-tracker");
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["steps"], 6000);
    assert!((value["calories"].as_f64().unwrap() - 183.6).abs() < 1e-9);
}

#[test]
fn missing_profile_fails() {
    let out = step_tracker(&["day", "5000,1h"]);
    assert!(!out.status.success());
}

#[test]
fn metrics_flag_renders_rejection_counter() {
    let out = step_tracker(&["--metrics", "--weight", "70", "--height", "175", "day", "-5,1h"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(
        stderr.contains("step_tracker_records_rejected_total{kind=\"day\"} 1"),
        "{stderr}"
    );
}

#[test]
fn weight_flag_overrides_invalid_environment_value() {
    let out = Command::new(env!("CARGO_BIN_EXE_step-tracker"))
        .args(["--weight", "70", "day", "5000,1h"])
        .env("STEP_TRACKER_WEIGHT_KG", "heavy")
        .env("STEP_TRACKER_HEIGHT", "175")
        .env("STEP_TRACKER_LOG_LEVEL", "warn")
        .output()
        .expect("spawn step-tracker");
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout).unwrap().contains("3.25"));
}
