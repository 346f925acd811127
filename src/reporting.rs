//! # Reporting Module / 报告模块
//!
//! This module turns the stream of command outcomes into report events.
//! The [`Reporter`] keeps the running counters and decides what to show;
//! a [`ReportSink`] renders the events (the console in production).
//!
//! 此模块将命令结果流转换为报告事件。
//! [`Reporter`] 维护运行计数并决定显示内容；
//! [`ReportSink`] 负责渲染这些事件（生产环境中为控制台）。

pub mod console;
pub mod html;

use crate::core::config::ReportOptions;
use crate::core::models::{Outcome, RunSummary};

pub use console::ConsoleSink;
pub use html::generate_html_report;

/// Receives the structured events emitted while a run progresses.
/// 接收运行过程中发出的结构化事件。
pub trait ReportSink {
    /// Called before a command is launched.
    fn command_started(&mut self, command: &str);
    /// Called once the command's process has exited (or failed to launch).
    fn command_finished(&mut self, outcome: &Outcome);
    /// The output of a command whose text matched the error heuristic.
    fn error_detected(&mut self, outcome: &Outcome);
    /// The full output of a command, in verbose mode.
    fn command_output(&mut self, outcome: &Outcome);
    /// The ordered list of failed commands, when requested and non-empty.
    fn failed_commands(&mut self, failures: &[String]);
    /// The final passed/failed counts.
    fn summary(&mut self, summary: &RunSummary);
}

/// Accumulates outcomes as they arrive and forwards events to a sink.
///
/// Only failed command strings are kept, unless [`Reporter::retain_outcomes`]
/// was requested for a full report.
///
/// 在结果到达时进行累计，并将事件转发给 sink。
/// 除非为完整报告调用了 [`Reporter::retain_outcomes`]，否则只保留失败的命令字符串。
pub struct Reporter<S: ReportSink> {
    sink: S,
    options: ReportOptions,
    summary: RunSummary,
    retained: Option<Vec<Outcome>>,
}

impl<S: ReportSink> Reporter<S> {
    pub fn new(sink: S, options: ReportOptions) -> Self {
        Self {
            sink,
            options,
            summary: RunSummary::default(),
            retained: None,
        }
    }

    /// Keeps every outcome so a report can be written after the run.
    pub fn retain_outcomes(mut self) -> Self {
        self.retained = Some(Vec::new());
        self
    }

    pub fn command_started(&mut self, command: &str) {
        self.sink.command_started(command);
    }

    pub fn command_finished(&mut self, outcome: Outcome) {
        self.summary.record(&outcome);
        self.sink.command_finished(&outcome);

        if self.options.show_errors && outcome.error_detected {
            self.sink.error_detected(&outcome);
        }
        if self.options.verbose {
            self.sink.command_output(&outcome);
        }

        if let Some(retained) = self.retained.as_mut() {
            retained.push(outcome);
        }
    }

    /// Emits the closing events and returns the accumulated summary.
    pub fn finish(&mut self) -> RunSummary {
        if self.options.print_failures && !self.summary.failures.is_empty() {
            self.sink.failed_commands(&self.summary.failures);
        }
        self.sink.summary(&self.summary);
        self.summary.clone()
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Outcomes kept by [`Reporter::retain_outcomes`]; empty otherwise.
    pub fn outcomes(&self) -> &[Outcome] {
        self.retained.as_deref().unwrap_or_default()
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
