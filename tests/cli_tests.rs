//! # CLI Integration Tests / CLI 集成测试
//!
//! Runs the `e2e-runner` binary against a temporary project and checks the
//! console report and exit status.
//!
//! 针对临时项目运行 `e2e-runner` 可执行文件，检查控制台报告和退出状态。

#![cfg(unix)]

mod common;

use assert_cmd::prelude::*;
use common::setup_project;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn sample_project() -> TempDir {
    setup_project(&[
        "# smb checks",
        "echo smb TARGET_HOST -u LOGIN_USERNAME",
        "false ldap TARGET_HOST",
        "echo ftp TARGET_HOST KERBEROS {DNS}",
    ])
}

fn runner(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("e2e-runner").unwrap();
    cmd.current_dir(project.path())
        .env("NO_COLOR", "1")
        .args(["--lang", "en", "--version-cmd", ""])
        .args(["-t", "10.0.0.1", "-u", "admin", "-p", "secret"]);
    cmd
}

/// A failing command is reported, but the runner itself still exits 0.
/// 失败的命令会被报告，但运行器本身仍以 0 退出。
#[test]
fn test_run_reports_counts_and_exits_successfully() {
    let project = sample_project();

    runner(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("Running 3 test commands"))
        .stdout(predicate::str::contains("Running command: echo smb 10.0.0.1 -u 'admin'"))
        .stdout(predicate::str::contains("Tests Passed: 2 Failed: 1"));
}

#[test]
fn test_print_failures_lists_failed_commands() {
    let project = sample_project();

    runner(&project)
        .arg("--print-failures")
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed Commands:"))
        .stdout(predicate::str::contains("false ldap 10.0.0.1"));
}

#[test]
fn test_protocol_filter() {
    let project = sample_project();

    runner(&project)
        .args(["--protocols", "smb", "ftp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running 2 test commands"))
        .stdout(predicate::str::contains("Tests Passed: 2 Failed: 0"))
        .stdout(predicate::str::contains("false ldap").not());
}

#[test]
fn test_line_number_selection_skips_comments() {
    let project = sample_project();

    runner(&project)
        .args(["--line-nums", "1-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running 1 test commands"))
        .stdout(predicate::str::contains("Tests Passed: 1 Failed: 0"));
}

#[test]
fn test_reversed_range_aborts_before_running() {
    let project = sample_project();

    runner(&project)
        .args(["--line-nums", "3-1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Running command").not())
        .stderr(predicate::str::contains("reversed"));
}

#[test]
fn test_missing_target_is_an_error() {
    let project = sample_project();
    let mut cmd = Command::cargo_bin("e2e-runner").unwrap();

    cmd.current_dir(project.path())
        .args(["-u", "admin", "-p", "secret", "--version-cmd", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required value 'target'"));
}

#[test]
fn test_kerberos_and_dns_flags_reach_commands() {
    let project = sample_project();

    runner(&project)
        .args(["-k", "--dns-server", "10.0.0.53", "--protocols", "ftp", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ftp 10.0.0.1 -k --dns-server 10.0.0.53"));
}

#[test]
fn test_version_probe_output_in_banner() {
    let project = sample_project();
    let mut cmd = Command::cargo_bin("e2e-runner").unwrap();

    cmd.current_dir(project.path())
        .env("NO_COLOR", "1")
        .args(["--lang", "en", "--version-cmd", "echo tool v9.9.9"])
        .args(["-t", "10.0.0.1", "-u", "admin", "-p", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("for tool v9.9.9"));
}

#[test]
fn test_html_report_is_generated() {
    let project = sample_project();
    let report = project.path().join("report.html");

    runner(&project)
        .arg("--html")
        .arg(&report)
        .assert()
        .success();

    let html = std::fs::read_to_string(&report).unwrap();
    assert!(html.contains("false ldap 10.0.0.1"));
}

#[test]
fn test_settings_file_supplies_credentials() {
    let project = sample_project();
    let settings = project.path().join("e2e.toml");
    std::fs::write(
        &settings,
        "target = \"10.9.9.9\"\nusername = \"svc\"\npassword = \"pw\"\nversion_command = \"\"\nprotocols = [\"smb\"]\n",
    )
    .unwrap();
    let mut cmd = Command::cargo_bin("e2e-runner").unwrap();

    cmd.current_dir(project.path())
        .env("NO_COLOR", "1")
        .args(["--lang", "en", "--config"])
        .arg(&settings)
        .assert()
        .success()
        .stdout(predicate::str::contains("echo smb 10.9.9.9 -u 'svc'"));
}
