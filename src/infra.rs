//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the runner:
//! process launching, file system access, settings resolution and logging.
//!
//! 此模块为运行器提供基础设施服务：
//! 进程启动、文件系统访问、设置解析和日志。

pub mod command;
pub mod fs;
pub mod logging;
pub mod resolve;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
