//! # Console Reporting Module / 控制台报告模块
//!
//! Prints report events to the terminal with color and localized messages.
//!
//! 使用颜色和本地化消息将报告事件打印到终端。

use colored::*;

use crate::core::models::{FailureReason, Outcome, RunSummary};
use crate::infra::t;
use crate::reporting::ReportSink;

/// A [`ReportSink`] that writes to stdout.
/// 写入 stdout 的 [`ReportSink`]。
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    locale: String,
}

impl ConsoleSink {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

impl ReportSink for ConsoleSink {
    fn command_started(&mut self, command: &str) {
        println!(
            "{}",
            t!("run.running_command", locale = &self.locale, command = command)
        );
    }

    fn command_finished(&mut self, outcome: &Outcome) {
        let command = outcome.command.trim();
        let duration = format!("{:.2}", outcome.duration.as_secs_f64());
        if outcome.passed {
            println!(
                "{}",
                t!("run.command_passed", locale = &self.locale, command = command, duration = duration)
                    .green()
            );
        } else {
            println!(
                "{}",
                t!("run.command_failed", locale = &self.locale, command = command, duration = duration)
                    .red()
                    .bold()
            );
            match outcome.failure_reason {
                Some(FailureReason::LaunchFailed) => println!(
                    "{}",
                    t!("run.launch_failed", locale = &self.locale, error = outcome.output_text().trim())
                        .red()
                ),
                Some(reason) => tracing::debug!(%command, %reason, "command failed"),
                None => {}
            }
        }
    }

    fn error_detected(&mut self, outcome: &Outcome) {
        println!("{}", t!("run.error_detected", locale = &self.locale).red().bold());
        println!("{}", outcome.output_text());
    }

    fn command_output(&mut self, outcome: &Outcome) {
        println!("{}\n{}", t!("run.results", locale = &self.locale), outcome.output_text());
    }

    fn failed_commands(&mut self, failures: &[String]) {
        println!("{}", t!("run.failed_commands", locale = &self.locale).red().bold());
        for failure in failures {
            println!("{}", failure.red().bold());
        }
    }

    fn summary(&mut self, summary: &RunSummary) {
        let line = t!(
            "run.summary",
            locale = &self.locale,
            passed = summary.passed,
            failed = summary.failed
        );
        if summary.failed == 0 {
            println!("{}", line.green().bold());
        } else {
            println!("{}", line.bold());
        }
    }
}
