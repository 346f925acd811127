//! # Command Execution Module / 命令执行模块
//!
//! Launches shell command lines and captures their merged output.
//!
//! 启动 shell 命令行并捕获其合并后的输出。

use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;
use tokio::sync::Mutex;

/// Builds a command that hands `command_line` to the platform shell.
/// 构建一个将 `command_line` 交给平台 shell 执行的命令。
pub fn shell_command(command_line: &str) -> Command {
    #[cfg(target_os = "windows")]
    let cmd = {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command_line]);
        cmd
    };

    #[cfg(not(target_os = "windows"))]
    let cmd = {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command_line]);
        cmd
    };

    cmd
}

/// Spawns a command, optionally feeds `stdin_payload` to it, and captures its
/// stdout and stderr into one byte buffer.
///
/// When `stdin_payload` is `Some`, the bytes are written and the pipe is
/// closed right away; when `None`, the child gets no stdin at all.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The combined stdout and stderr bytes.
///
/// 派生一个命令，可选地向其写入 `stdin_payload`，并将其 stdout 和 stderr
/// 捕获到同一个字节缓冲区中。
///
/// # Returns
/// 一个元组，包含：
/// - 进程的 `ExitStatus`（包装在 `io::Result` 中）。
/// - 合并的 stdout 和 stderr 字节。
pub async fn spawn_and_capture(
    mut cmd: Command,
    stdin_payload: Option<&[u8]>,
) -> (std::io::Result<ExitStatus>, Vec<u8>) {
    let stdin = if stdin_payload.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    };

    let mut child = match cmd
        .stdin(stdin)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
    {
        Ok(child) => child,
        Err(e) => return (Err(e), Vec::new()),
    };

    if let (Some(payload), Some(mut pipe)) = (stdin_payload, child.stdin.take()) {
        // The child may exit without reading its input; a broken pipe here is expected.
        if let Err(e) = pipe.write_all(payload).await {
            tracing::debug!(error = %e, "could not write auto-confirm input");
        }
        drop(pipe);
    }

    let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
        return (
            Err(std::io::Error::other("failed to capture child output")),
            Vec::new(),
        );
    };

    let output = Arc::new(Mutex::new(Vec::new()));
    let stdout_handle = tokio::spawn(pump(stdout, Arc::clone(&output)));
    let stderr_handle = tokio::spawn(pump(stderr, Arc::clone(&output)));

    let status = child.wait().await;

    // Both readers must finish so no trailing output is lost.
    for handle in [stdout_handle, stderr_handle] {
        if let Err(e) = handle.await {
            tracing::warn!(error = %e, "output reader task failed");
        }
    }

    let captured = std::mem::take(&mut *output.lock().await);
    (status, captured)
}

/// Copies everything readable from `reader` into the shared buffer, chunk by chunk.
async fn pump<R>(mut reader: R, sink: Arc<Mutex<Vec<u8>>>)
where
    R: AsyncRead + Unpin,
{
    let mut buf = [0u8; 4096];
    loop {
        match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => sink.lock().await.extend_from_slice(&buf[..n]),
            Err(e) => {
                tracing::debug!(error = %e, "stopped reading child output");
                break;
            }
        }
    }
}
