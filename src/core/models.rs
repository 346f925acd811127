//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures that flow through the runner:
//! the per-command `Outcome` and the aggregated `RunSummary`.
//!
//! 此模块定义了在运行器中流转的数据结构：
//! 每条命令的 `Outcome` 以及汇总的 `RunSummary`。

use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

use crate::infra::t;

/// Enumerates the possible reasons for a command failure.
/// 枚举命令失败的可能原因。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FailureReason {
    /// The command ran to completion with a non-zero exit code.
    /// 命令运行结束，但退出码非零。
    NonZeroExit(i32),
    /// The process was terminated without an exit code (e.g. by a signal).
    /// 进程在没有退出码的情况下终止（例如被信号终止）。
    Terminated,
    /// The shell could not be launched or its status could not be collected.
    /// 无法启动 shell 或无法获取其状态。
    LaunchFailed,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::NonZeroExit(code) => write!(f, "exit code {code}"),
            FailureReason::Terminated => write!(f, "terminated"),
            FailureReason::LaunchFailed => write!(f, "launch failed"),
        }
    }
}

/// The recorded result of one executed command.
/// 单条已执行命令的记录结果。
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The command string exactly as it was handed to the shell.
    /// 交给 shell 的命令字符串（原样）。
    pub command: String,
    /// Exit code, if the process exited normally.
    /// 进程正常退出时的退出码。
    pub exit_code: Option<i32>,
    /// Combined stdout and stderr bytes.
    /// 合并后的 stdout 和 stderr 字节。
    pub output: Vec<u8>,
    /// `true` when the process exited with status zero.
    pub passed: bool,
    /// Advisory flag set when the output mentions "error" or "failure".
    /// It never influences `passed`.
    pub error_detected: bool,
    /// Why the command failed, `None` when it passed.
    pub failure_reason: Option<FailureReason>,
    pub duration: Duration,
}

impl Outcome {
    /// Returns the captured output decoded as UTF-8, replacing invalid sequences.
    /// 以 UTF-8 解码返回捕获的输出，无效序列会被替换。
    pub fn output_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.output)
    }

    pub fn is_failure(&self) -> bool {
        !self.passed
    }

    /// Gets the status of the outcome as a localized string for display.
    /// 以本地化字符串形式获取结果状态以供显示。
    pub fn get_status_str(&self, locale: &str) -> String {
        if self.passed {
            t!("report.status_passed", locale = locale).to_string()
        } else {
            t!("report.status_failed", locale = locale).to_string()
        }
    }

    /// Gets the CSS class used by the HTML report for this outcome.
    pub fn get_status_class(&self) -> &'static str {
        if self.passed {
            "status-Passed"
        } else {
            "status-Failed"
        }
    }
}

/// Aggregated counters of a run plus the ordered list of failed commands.
/// 一次运行的汇总计数以及按顺序排列的失败命令列表。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    /// Failed command strings in execution order.
    /// 按执行顺序排列的失败命令字符串。
    pub failures: Vec<String>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Folds one outcome into the counters.
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
            self.failures.push(outcome.command.clone());
        }
    }
}
