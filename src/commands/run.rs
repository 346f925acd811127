// src/commands/run.rs

use anyhow::{Context, Result};
use colored::*;
use std::env;

use crate::{
    core::{
        config::ConfigFile,
        execution::{probe_version, run_all, LaunchPolicy},
        generator::generate,
    },
    infra::{
        resolve::{load_config_file, resolve, RunArgs},
        t,
    },
    reporting::{generate_html_report, ConsoleSink, Reporter},
    resolve_locale,
};

/// Resolves settings, generates the commands and runs them in order.
///
/// Returns an error only for problems found before the first command runs
/// (unreadable settings, bad line selection, missing commands file). Failed
/// commands are reported but never turn into an error.
pub async fn execute(args: RunArgs) -> Result<()> {
    let settings_path = args.config.clone();
    let file = match &settings_path {
        Some(path) => load_config_file(path)?,
        None => ConfigFile::default(),
    };

    let base_dir = env::current_dir().context("Failed to determine the working directory")?;
    let resolved = resolve(args, file, &base_dir)?;

    let locale = resolve_locale(resolved.language.as_deref());
    rust_i18n::set_locale(&locale);

    if let Some(path) = &settings_path {
        println!("{}", t!("config.loaded", locale = &locale, path = path.display()).cyan());
    }
    println!(
        "{}",
        t!("config.commands_file", locale = &locale, path = resolved.catalog_path.display()).cyan()
    );

    let commands = generate(&resolved.catalog_path, &resolved.config, &resolved.selection)?;

    let version = match &resolved.version_command {
        Some(cmd) => probe_version(cmd).await,
        None => None,
    }
    .unwrap_or_else(|| t!("run.unknown_version", locale = &locale).to_string());

    println!(
        "{}",
        t!("run.banner", locale = &locale, count = commands.len(), version = version)
            .green()
            .bold()
    );
    if commands.is_empty() {
        println!("{}", t!("run.no_commands", locale = &locale).yellow());
    }

    let mut reporter = Reporter::new(ConsoleSink::new(&locale), resolved.report);
    if resolved.html.is_some() {
        reporter = reporter.retain_outcomes();
    }

    let policy = LaunchPolicy::default();
    let summary = run_all(commands, &policy, &mut reporter).await;
    tracing::info!(passed = summary.passed, failed = summary.failed, "run finished");

    if let Some(report_path) = &resolved.html {
        println!("\n{}", t!("run.html_report", locale = &locale, path = report_path.display()));
        if let Err(e) = generate_html_report(reporter.outcomes(), report_path, &locale) {
            eprintln!("{} {:#}", t!("run.html_report_failed", locale = &locale).red(), e);
        }
    }

    Ok(())
}
