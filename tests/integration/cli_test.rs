//! CLI surface tests against the built binary

use assert_cmd::Command;
use predicates::prelude::*;

fn sio() -> Command {
    Command::cargo_bin("sio").unwrap()
}

#[test]
fn help_describes_the_tool_and_subcommands() {
    sio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Serial I/O viewer"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_prints_package_version() {
    sio()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_points_into_dot_config() {
    sio()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".config/sio/config.toml"));
}

#[test]
fn config_show_prints_toml_sections() {
    sio()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[display]"))
        .stdout(predicate::str::contains("hex_mode"))
        .stdout(predicate::str::contains("baud_rate"));
}

#[test]
fn list_command_succeeds() {
    sio().arg("list").assert().success();
}

#[test]
fn completions_generate_for_bash() {
    sio()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sio"));
}

#[test]
fn missing_device_argument_is_an_error() {
    sio()
        .assert()
        .failure()
        .stderr(predicate::str::contains("No device given"));
}

#[test]
fn nonexistent_device_reports_not_found() {
    sio()
        .arg("/dev/sio-missing-device")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Device not found"));
}

#[test]
fn color_value_out_of_range_is_rejected() {
    sio()
        .args(["/dev/null", "--color", "300"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn unknown_hex_mode_is_rejected() {
    sio()
        .args(["/dev/null", "--hex", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
