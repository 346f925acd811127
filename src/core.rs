//! # Core Module / 核心模块
//!
//! This module contains the core pipeline of the runner: placeholder
//! substitution, line selection, command generation and sequential execution.
//!
//! 此模块包含运行器的核心流水线：
//! 占位符替换、行选择、命令生成以及顺序执行。

pub mod config;
pub mod execution;
pub mod generator;
pub mod models;
pub mod placeholder;
pub mod selector;

// Re-exports
pub use config::{ReportOptions, RunConfig};
pub use execution::{run_all, LaunchPolicy};
pub use generator::generate;
pub use models::{Outcome, RunSummary};
pub use placeholder::substitute;
pub use selector::{select, SelectionSpec};
