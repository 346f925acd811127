//! # E2E Runner Library / E2E Runner 库
//!
//! This library provides the core functionality for the e2e-runner tool,
//! which reads a catalog of templated shell commands, fills in run-specific
//! values, runs the selected commands one by one and reports which failed.
//!
//! 此库为 e2e-runner 工具提供核心功能：读取模板化 shell 命令目录，
//! 填入本次运行的参数，逐条运行选中的命令并报告失败的命令。
//!
//! ## Modules / 模块
//!
//! - `core` - Substitution, selection, generation and the execution engine
//! - `infra` - Process launching, file system access, settings and logging
//! - `reporting` - Streaming reporter, console sink and HTML report
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 替换、选择、生成以及执行引擎
//! - `infra` - 进程启动、文件系统访问、设置和日志
//! - `reporting` - 流式报告器、控制台输出和 HTML 报告
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::execution;
pub use core::models;

/// Picks the locale used for console output.
///
/// An explicitly requested locale wins, then the system locale. Each is first
/// matched in full (e.g. "zh-CN"), then by language code (e.g. "en" from
/// "en-US"); the final fallback is "en".
pub fn resolve_locale(requested: Option<&str>) -> String {
    let available_locales = rust_i18n::available_locales!();
    let system = sys_locale::get_locale();

    requested
        .into_iter()
        .chain(system.as_deref())
        .find_map(|locale| {
            if available_locales.contains(&locale) {
                Some(locale)
            } else {
                locale
                    .split('-')
                    .next()
                    .filter(|lang_code| available_locales.contains(lang_code))
            }
        })
        .unwrap_or("en")
        .to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
