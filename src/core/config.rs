//! # Configuration Types / 配置类型
//!
//! Immutable settings handed to the core once per run, plus the optional
//! TOML settings file they may be resolved from.
//!
//! 每次运行时一次性传入核心的不可变设置，
//! 以及可用于解析这些设置的可选 TOML 配置文件。

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Values substituted into template lines. Host, username and password are
/// always populated by the time this reaches the core.
///
/// 替换到模板行中的值。到达核心时主机、用户名和密码必定已填充。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub target: String,
    pub username: String,
    pub password: String,
    /// Emit the kerberos flag in place of `KERBEROS `.
    pub kerberos: bool,
    pub dns_server: Option<String>,
    pub test_user_file: PathBuf,
    pub test_password_file: PathBuf,
    /// Prefix every command with the `poetry run` wrapper.
    pub use_wrapper: bool,
}

/// Options that only affect what the reporter prints.
/// 仅影响报告器输出内容的选项。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Echo the full output of every command.
    /// 回显每条命令的完整输出。
    pub verbose: bool,
    /// Echo the output of commands whose text looks like an error.
    /// 回显输出疑似错误的命令的输出。
    pub show_errors: bool,
    /// List every failed command after the summary.
    /// 在摘要之后列出所有失败的命令。
    pub print_failures: bool,
}

/// Defaults loaded from an optional TOML settings file.
/// Every field is optional; command-line values take precedence.
///
/// 从可选 TOML 配置文件加载的默认值。
/// 所有字段均为可选；命令行参数优先。
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub kerberos: Option<bool>,
    #[serde(default)]
    pub dns_server: Option<String>,
    #[serde(default)]
    pub protocols: Vec<String>,
    #[serde(default)]
    pub test_user_file: Option<String>,
    #[serde(default)]
    pub test_password_file: Option<String>,
    #[serde(default)]
    pub poetry: Option<bool>,
    #[serde(default)]
    pub commands_file: Option<String>,
    /// Command probed for the version of the tool under test.
    /// An empty string disables the probe.
    #[serde(default)]
    pub version_command: Option<String>,
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    #[serde(default)]
    pub language: Option<String>,
}
