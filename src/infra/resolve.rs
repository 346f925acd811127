//! # Settings Resolution / 设置解析
//!
//! Merges command-line values with the optional TOML settings file and
//! discovers default files, once, at startup. The result is a fully populated
//! set of immutable settings; nothing downstream searches the filesystem.
//!
//! 在启动时一次性合并命令行参数与可选的 TOML 配置文件，并查找默认文件。
//! 结果是一组完全填充的不可变设置；后续流程不会再搜索文件系统。

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::config::{ConfigFile, ReportOptions, RunConfig};
use crate::core::selector::{SelectionError, SelectionSpec};
use crate::infra::fs::{expand_path, first_existing};

/// Version probe used when none is configured.
pub const DEFAULT_VERSION_COMMAND: &str = "netexec --version";

/// Catalog locations tried, relative to the working directory.
pub const CATALOG_CANDIDATES: [&str; 2] = ["tests/e2e_commands.txt", "e2e_commands.txt"];

/// User-list locations tried, relative to the catalog's directory.
pub const USER_FILE_CANDIDATES: [&str; 2] = ["tests/data/test_users.txt", "data/test_users.txt"];

/// Password-list locations tried, relative to the catalog's directory.
pub const PASSWORD_FILE_CANDIDATES: [&str; 2] =
    ["tests/data/test_passwords.txt", "data/test_passwords.txt"];

/// Errors raised while building the run settings. All of them abort the run
/// before any command executes.
///
/// 构建运行设置时产生的错误。它们都会在任何命令执行之前中止运行。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required value '{0}': pass it on the command line or set it in the settings file")]
    MissingValue(&'static str),

    #[error("no commands file found (searched: {searched}); pass --commands-file")]
    CatalogNotFound { searched: String },

    #[error("no {name} found (searched: {searched}); pass --{flag}")]
    ListFileNotFound {
        name: &'static str,
        flag: &'static str,
        searched: String,
    },

    #[error("invalid path '{raw}': {reason}")]
    InvalidPath { raw: String, reason: String },

    #[error("failed to read settings file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Raw values collected from the command line, before any defaults apply.
/// 从命令行收集的原始值，尚未应用任何默认值。
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub target: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub kerberos: bool,
    pub verbose: bool,
    pub show_errors: bool,
    pub poetry: bool,
    pub print_failures: bool,
    pub protocols: Vec<String>,
    pub line_nums: Vec<String>,
    pub test_user_file: Option<String>,
    pub test_password_file: Option<String>,
    pub dns_server: Option<String>,
    pub commands_file: Option<String>,
    pub config: Option<PathBuf>,
    pub version_cmd: Option<String>,
    pub html: Option<PathBuf>,
    pub lang: Option<String>,
}

/// Everything the run needs, fully resolved.
/// 运行所需的全部内容，已完全解析。
#[derive(Debug, Clone)]
pub struct ResolvedRun {
    pub config: RunConfig,
    pub selection: SelectionSpec,
    pub report: ReportOptions,
    pub catalog_path: PathBuf,
    /// `None` when the version probe is disabled.
    pub version_command: Option<String>,
    pub html: Option<PathBuf>,
    /// Requested language, if any; the caller falls back to the system locale.
    pub language: Option<String>,
}

/// Loads the optional TOML settings file.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merges `args` over `file` and discovers default paths relative to `base_dir`.
///
/// 将 `args` 合并到 `file` 之上，并相对于 `base_dir` 查找默认路径。
pub fn resolve(args: RunArgs, file: ConfigFile, base_dir: &Path) -> Result<ResolvedRun, ConfigError> {
    let target = args.target.or(file.target).ok_or(ConfigError::MissingValue("target"))?;
    let username = args
        .username
        .or(file.username)
        .ok_or(ConfigError::MissingValue("username"))?;
    let password = args
        .password
        .or(file.password)
        .ok_or(ConfigError::MissingValue("password"))?;

    let protocols = if args.protocols.is_empty() {
        file.protocols
    } else {
        args.protocols
    };
    let selection = SelectionSpec::from_tokens(&args.line_nums, protocols)?;

    let catalog_path = match args.commands_file.or(file.commands_file) {
        Some(raw) => expand(&raw)?,
        None => discover_catalog(base_dir)?,
    };
    tracing::debug!(path = %catalog_path.display(), "commands file");

    let catalog_dir = catalog_path.parent().unwrap_or(base_dir).to_path_buf();
    let test_user_file = match args.test_user_file.or(file.test_user_file) {
        Some(raw) => expand(&raw)?,
        None => discover_list_file(&catalog_dir, &USER_FILE_CANDIDATES, "test user file", "test-user-file")?,
    };
    let test_password_file = match args.test_password_file.or(file.test_password_file) {
        Some(raw) => expand(&raw)?,
        None => discover_list_file(
            &catalog_dir,
            &PASSWORD_FILE_CANDIDATES,
            "test password file",
            "test-password-file",
        )?,
    };

    let version_command = match args.version_cmd.or(file.version_command) {
        Some(cmd) if cmd.trim().is_empty() => None,
        Some(cmd) => Some(cmd),
        None => Some(DEFAULT_VERSION_COMMAND.to_string()),
    };

    let config = RunConfig {
        target,
        username,
        password,
        kerberos: args.kerberos || file.kerberos.unwrap_or(false),
        dns_server: args.dns_server.or(file.dns_server).filter(|s| !s.is_empty()),
        test_user_file,
        test_password_file,
        use_wrapper: args.poetry || file.poetry.unwrap_or(false),
    };

    Ok(ResolvedRun {
        config,
        selection,
        report: ReportOptions {
            verbose: args.verbose,
            show_errors: args.show_errors,
            print_failures: args.print_failures,
        },
        catalog_path,
        version_command,
        html: args.html,
        language: args.lang.or(file.language),
    })
}

fn expand(raw: &str) -> Result<PathBuf, ConfigError> {
    expand_path(raw).map_err(|e| ConfigError::InvalidPath {
        raw: raw.to_string(),
        reason: format!("{e:#}"),
    })
}

fn discover_catalog(base_dir: &Path) -> Result<PathBuf, ConfigError> {
    let candidates: Vec<PathBuf> = CATALOG_CANDIDATES.iter().map(|c| base_dir.join(c)).collect();
    first_existing(candidates.clone()).ok_or_else(|| ConfigError::CatalogNotFound {
        searched: join_paths(&candidates),
    })
}

fn discover_list_file(
    dir: &Path,
    names: &[&str],
    name: &'static str,
    flag: &'static str,
) -> Result<PathBuf, ConfigError> {
    let candidates: Vec<PathBuf> = names.iter().map(|c| dir.join(c)).collect();
    let found = first_existing(candidates.clone());
    tracing::debug!(%name, found = ?found, "list file discovery");
    found.ok_or_else(|| ConfigError::ListFileNotFound {
        name,
        flag,
        searched: join_paths(&candidates),
    })
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
