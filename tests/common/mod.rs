// Shared test helpers for integration tests
#![allow(dead_code)]

use e2e_runner::core::config::RunConfig;
use e2e_runner::core::models::{Outcome, RunSummary};
use e2e_runner::reporting::ReportSink;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::{tempdir, TempDir};

/// A run configuration with every value populated and all flags off.
pub fn sample_config() -> RunConfig {
    RunConfig {
        target: "10.0.0.1".to_string(),
        username: "admin".to_string(),
        password: "Passw0rd!".to_string(),
        kerberos: false,
        dns_server: None,
        test_user_file: PathBuf::from("/data/test_users.txt"),
        test_password_file: PathBuf::from("/data/test_passwords.txt"),
        use_wrapper: false,
    }
}

/// Writes `lines` as a commands file inside `dir` and returns its path.
pub fn write_catalog(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("e2e_commands.txt");
    fs::write(&path, lines.join("\n") + "\n").expect("Failed to write commands file");
    path
}

/// A temporary project laid out like a real checkout:
/// `tests/e2e_commands.txt` plus `tests/data/test_users.txt` and
/// `tests/data/test_passwords.txt`.
pub fn setup_project(lines: &[&str]) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let tests_dir = temp_dir.path().join("tests");
    let data_dir = tests_dir.join("data");
    fs::create_dir_all(&data_dir).expect("Failed to create data directory");
    write_catalog(&tests_dir, lines);
    fs::write(data_dir.join("test_users.txt"), "admin\nguest\n").expect("Failed to write users");
    fs::write(data_dir.join("test_passwords.txt"), "Passw0rd!\n").expect("Failed to write passwords");
    temp_dir
}

/// Builds an outcome without running anything.
pub fn outcome(command: &str, passed: bool, output: &str) -> Outcome {
    Outcome {
        command: command.to_string(),
        exit_code: Some(if passed { 0 } else { 1 }),
        output: output.as_bytes().to_vec(),
        passed,
        error_detected: e2e_runner::execution::detect_error_text(output),
        failure_reason: (!passed).then_some(e2e_runner::models::FailureReason::NonZeroExit(1)),
        duration: Duration::from_millis(5),
    }
}

/// Everything a [`RecordingSink`] has been told, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Started(String),
    Finished { command: String, passed: bool },
    ErrorDetected(String),
    Output(String),
    FailedCommands(Vec<String>),
    Summary { passed: usize, failed: usize },
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Event>,
}

impl RecordingSink {
    pub fn finished(&self) -> Vec<(String, bool)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Finished { command, passed } => Some((command.clone(), *passed)),
                _ => None,
            })
            .collect()
    }
}

impl ReportSink for RecordingSink {
    fn command_started(&mut self, command: &str) {
        self.events.push(Event::Started(command.to_string()));
    }

    fn command_finished(&mut self, outcome: &Outcome) {
        self.events.push(Event::Finished {
            command: outcome.command.clone(),
            passed: outcome.passed,
        });
    }

    fn error_detected(&mut self, outcome: &Outcome) {
        self.events.push(Event::ErrorDetected(outcome.command.clone()));
    }

    fn command_output(&mut self, outcome: &Outcome) {
        self.events.push(Event::Output(outcome.output_text().into_owned()));
    }

    fn failed_commands(&mut self, failures: &[String]) {
        self.events.push(Event::FailedCommands(failures.to_vec()));
    }

    fn summary(&mut self, summary: &RunSummary) {
        self.events.push(Event::Summary {
            passed: summary.passed,
            failed: summary.failed,
        });
    }
}
