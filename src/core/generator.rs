//! # Command Generator / 命令生成器
//!
//! Turns the catalog file into the ordered list of ready-to-run commands by
//! composing the line selector with placeholder substitution.
//!
//! 通过组合行选择器与占位符替换，将命令目录文件转换为有序的可执行命令列表。

use anyhow::Result;
use std::path::Path;

use crate::core::config::RunConfig;
use crate::core::placeholder::substitute;
use crate::core::selector::{select, SelectionSpec};
use crate::infra::fs::read_catalog;

/// Reads `catalog_path` and returns the selected, substituted commands.
///
/// The file is read again on every call, so two calls with an unchanged
/// catalog and configuration produce identical sequences.
///
/// 读取 `catalog_path` 并返回经过选择和替换的命令。
/// 每次调用都会重新读取文件，因此在目录和配置不变时两次调用产生相同的序列。
pub fn generate(catalog_path: &Path, config: &RunConfig, spec: &SelectionSpec) -> Result<Vec<String>> {
    let catalog = read_catalog(catalog_path)?;
    let commands = generate_from_lines(&catalog, config, spec);
    tracing::debug!(
        catalog = %catalog_path.display(),
        lines = catalog.len(),
        selected = commands.len(),
        "generated commands"
    );
    Ok(commands)
}

/// Same as [`generate`] for a catalog already held in memory.
pub fn generate_from_lines<S: AsRef<str>>(
    catalog: &[S],
    config: &RunConfig,
    spec: &SelectionSpec,
) -> Vec<String> {
    select(catalog, spec)
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| substitute(line, config))
        .collect()
}
