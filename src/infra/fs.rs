//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the file system operations the runner needs:
//! reading the commands catalog, expanding user-supplied paths and probing
//! candidate locations for default files.
//!
//! 此模块提供运行器所需的文件系统操作：
//! 读取命令目录、展开用户提供的路径以及探测默认文件的候选位置。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the catalog file into one string per physical line.
///
/// # Arguments
/// * `path` - Path to the commands file
///
/// # Returns
/// The lines of the file, without line terminators.
pub fn read_catalog(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read commands file: {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Returns the first candidate that exists as a regular file.
pub fn first_existing<I>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    candidates.into_iter().find(|path| path.is_file())
}

/// Expands `~` and environment variables in a user-supplied path.
///
/// # Arguments
/// * `raw` - The path as typed on the command line or in a settings file
///
/// # Returns
/// The expanded path, or an error naming the undefined variable.
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).with_context(|| format!("Failed to expand path: {raw}"))?;
    Ok(PathBuf::from(expanded.into_owned()))
}
