//! Command-line integration tests for the non-interactive modes.

use assert_cmd::Command;
use predicates::prelude::*;

fn slopeview() -> Command {
    Command::cargo_bin("slopeview").unwrap()
}

#[test]
fn explain_default_line() {
    slopeview()
        .arg("--explain")
        .assert()
        .success()
        .stdout(predicate::str::contains("Equation: y = 1x + 0"))
        .stdout(predicate::str::contains("origin (0, 0)"));
}

#[test]
fn explain_in_chinese() {
    slopeview()
        .args(["--explain", "--lang", "zh", "--k", "-4", "--b", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("函数表达式：y = -4x + 2"))
        .stdout(predicate::str::contains("陡峭"));
}

#[test]
fn dump_falling_line() {
    slopeview()
        .args(["--dump", "--k=-2", "--b=1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("clear\n"))
        .stdout(predicate::str::contains("\"Δy = -4.0\""))
        .stdout(predicate::str::contains("text intercept (310.0, 250.0) Left bold \"(0, 1)\""))
        .stdout(predicate::str::contains("pointer: Move the pointer onto the line"));
}

#[test]
fn dump_tiny_falling_slope_rounds_to_unsigned_zero() {
    slopeview()
        .args(["--dump", "--k=-0.01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Δy = 0.0\""))
        .stdout(predicate::str::contains("Δy = -0.0").not());
}

#[test]
fn dump_flat_line_has_no_triangle() {
    slopeview()
        .args(["--dump", "--k", "0", "--b", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" slope ").not());
}

#[test]
fn dump_with_pointer_on_line() {
    // (1, 5) on y = 2x + 3 sits at surface (340, 100).
    slopeview()
        .args(["--dump", "--k", "2", "--b", "3", "--pointer", "340,100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"(1.0, 5.0)\""))
        .stdout(predicate::str::ends_with("pointer: (1.00, 5.00)\n"));
}

#[test]
fn rejects_bad_scale() {
    slopeview()
        .args(["--dump", "--scale", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scale must be positive"));
}

#[test]
fn rejects_scale_too_fine_for_the_grid() {
    slopeview()
        .args(["--dump", "--scale", "0.001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("grid lines per axis"));
}

#[test]
fn rejects_bad_pointer() {
    slopeview()
        .args(["--dump", "--pointer", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pointer position"));
}

#[test]
fn log_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("slopeview.log");
    slopeview()
        .arg("--explain")
        .arg("--log")
        .arg(&log)
        .assert()
        .success();
    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting Slopeview"));
}
