//! # Execution Engine Module / 执行引擎模块
//!
//! Runs generated commands one at a time, in order. Each command gets its own
//! shell process which is reaped before the next one starts. There is no
//! timeout and no retry: a hanging command blocks the run, which keeps the
//! last "Running command" line pointing at the culprit.
//!
//! 按顺序逐条运行生成的命令。每条命令拥有独立的 shell 进程，
//! 并在下一条命令开始之前被回收。没有超时也没有重试：
//! 挂起的命令会阻塞整个运行，使最后一条 "Running command" 行指向问题命令。

use std::time::Instant;

use crate::core::models::{FailureReason, Outcome, RunSummary};
use crate::infra::command::{shell_command, spawn_and_capture};
use crate::reporting::{ReportSink, Reporter};

/// Answer written to every command's stdin so yes/no prompts do not block.
pub const AUTO_CONFIRM: &[u8] = b"y";

/// Substrings that mark output as suspicious when error scanning is enabled.
const ERROR_MARKERS: [&str; 2] = ["error", "failure"];

/// How each command is handed to the process launcher.
/// 每条命令交给进程启动器的方式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPolicy {
    /// Bytes written to stdin before it is closed. `None` leaves stdin empty.
    /// 在关闭 stdin 之前写入的字节。`None` 表示不提供 stdin。
    pub auto_confirm: Option<Vec<u8>>,
    /// Rewrite `"` to `'` before launching.
    /// 在启动之前将 `"` 改写为 `'`。
    pub single_quote_rewrite: bool,
}

impl Default for LaunchPolicy {
    fn default() -> Self {
        Self {
            auto_confirm: Some(AUTO_CONFIRM.to_vec()),
            single_quote_rewrite: cfg!(target_os = "linux"),
        }
    }
}

impl LaunchPolicy {
    /// Applies the quote normalization of this policy to `command`.
    pub fn prepare(&self, command: String) -> String {
        if self.single_quote_rewrite {
            command.replace('"', "'")
        } else {
            command
        }
    }
}

/// Case-insensitive check for "error" or "failure" in command output.
/// The result is advisory and never changes pass/fail classification.
///
/// 不区分大小写地检查命令输出中是否包含 "error" 或 "failure"。
/// 结果仅供参考，绝不会改变通过/失败的分类。
pub fn detect_error_text(output: &str) -> bool {
    let lowered = output.to_lowercase();
    ERROR_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Runs one already-prepared command and classifies it by exit status.
/// A launch failure yields a failed outcome instead of an error.
///
/// 运行一条已准备好的命令并按退出状态分类。
/// 启动失败会产生失败的结果，而不是错误。
pub async fn run_command(command: String, policy: &LaunchPolicy) -> Outcome {
    let start_time = Instant::now();
    let cmd = shell_command(&command);

    tracing::debug!(%command, "launching");
    let (status_res, mut output) = spawn_and_capture(cmd, policy.auto_confirm.as_deref()).await;
    let duration = start_time.elapsed();

    let (exit_code, failure_reason) = match status_res {
        Ok(status) if status.success() => (status.code(), None),
        Ok(status) => match status.code() {
            Some(code) => (Some(code), Some(FailureReason::NonZeroExit(code))),
            None => (None, Some(FailureReason::Terminated)),
        },
        Err(e) => {
            tracing::warn!(%command, error = %e, "failed to launch command");
            output.extend_from_slice(e.to_string().as_bytes());
            (None, Some(FailureReason::LaunchFailed))
        }
    };

    let error_detected = detect_error_text(&String::from_utf8_lossy(&output));

    Outcome {
        command,
        exit_code,
        output,
        passed: failure_reason.is_none(),
        error_detected,
        failure_reason,
        duration,
    }
}

/// Runs every command in order, streaming each outcome to `reporter`.
///
/// Each command is consumed exactly once. The reporter announces it before
/// launch and records it after completion; the returned summary therefore
/// counts exactly as many outcomes as commands were supplied.
///
/// 按顺序运行所有命令，并将每个结果流式传递给 `reporter`。
/// 每条命令只会被消费一次。
pub async fn run_all<I, S>(commands: I, policy: &LaunchPolicy, reporter: &mut Reporter<S>) -> RunSummary
where
    I: IntoIterator<Item = String>,
    S: ReportSink,
{
    for command in commands {
        let command = policy.prepare(command);
        reporter.command_started(&command);
        let outcome = run_command(command, policy).await;
        reporter.command_finished(outcome);
    }
    reporter.finish()
}

/// Runs the version probe command and returns its trimmed output.
/// Returns `None` when the probe cannot be launched, fails, or prints nothing.
///
/// 运行版本探测命令并返回其去除空白后的输出。
pub async fn probe_version(command: &str) -> Option<String> {
    let (status, output) = spawn_and_capture(shell_command(command), None).await;
    match status {
        Ok(status) if status.success() => {
            let version = String::from_utf8_lossy(&output).trim().to_string();
            (!version.is_empty()).then_some(version)
        }
        Ok(status) => {
            tracing::debug!(%command, ?status, "version probe failed");
            None
        }
        Err(e) => {
            tracing::debug!(%command, error = %e, "version probe could not launch");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_markers_case_insensitively() {
        assert!(detect_error_text("[-] ERROR: connection refused"));
        assert!(detect_error_text("STATUS_LOGON_FAILURE"));
        assert!(!detect_error_text("[+] all good"));
        assert!(!detect_error_text(""));
    }

    #[test]
    fn quote_rewrite_follows_policy() {
        let rewrite = LaunchPolicy {
            auto_confirm: None,
            single_quote_rewrite: true,
        };
        assert_eq!(rewrite.prepare("nxc -u \"a b\"".to_string()), "nxc -u 'a b'");

        let keep = LaunchPolicy {
            single_quote_rewrite: false,
            ..rewrite
        };
        assert_eq!(keep.prepare("nxc -u \"a b\"".to_string()), "nxc -u \"a b\"");
    }

    #[test]
    fn default_policy_auto_confirms() {
        assert_eq!(LaunchPolicy::default().auto_confirm.as_deref(), Some(AUTO_CONFIRM));
    }
}
