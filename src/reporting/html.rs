//! # HTML Reporting Module / HTML 报告模块
//!
//! Writes a static HTML page with the run totals and one row per executed
//! command. Output of failed commands can be expanded in place.
//!
//! 生成一个静态 HTML 页面，包含运行总计以及每条已执行命令的一行记录。
//! 失败命令的输出可以就地展开。

use anyhow::{Context, Result};
use chrono::Local;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::fs;
use std::path::Path;

use crate::core::models::Outcome;
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 2rem; color: #222; }
h1 { margin-bottom: 0.2rem; }
.generated { color: #777; margin-bottom: 1.5rem; }
.summary-container { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
.summary-item { border: 1px solid #ddd; border-radius: 6px; padding: 0.6rem 1.2rem; text-align: center; }
.summary-item .count { display: block; font-size: 1.6rem; font-weight: bold; }
.passed-text { color: #2e7d32; }
.failed-text { color: #c62828; }
.flagged-text { color: #ef6c00; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #eee; padding: 0.4rem 0.6rem; text-align: left; vertical-align: top; }
td.command { font-family: monospace; word-break: break-all; }
.status-cell { display: inline-block; border-radius: 4px; padding: 0.1rem 0.5rem; color: #fff; }
.status-Passed { background: #2e7d32; }
.status-Failed { background: #c62828; }
details pre { background: #f6f6f6; padding: 0.6rem; overflow-x: auto; }
"#;

/// Generates an HTML report from the outcomes of a run.
///
/// 根据一次运行的结果生成 HTML 报告。
///
/// # Errors / 错误
/// Returns an error if the report cannot be written to `output_path`.
/// 如果无法将报告写入 `output_path`，则返回错误。
pub fn generate_html_report(outcomes: &[Outcome], output_path: &Path, locale: &str) -> Result<()> {
    let page = render_report(outcomes, locale);
    fs::write(output_path, page.into_string())
        .with_context(|| format!("Failed to write HTML report to {}", output_path.display()))
}

/// Renders the report page without touching the filesystem.
pub fn render_report(outcomes: &[Outcome], locale: &str) -> Markup {
    let total = outcomes.len();
    let passed = outcomes.iter().filter(|o| o.passed).count();
    let failed = total - passed;
    let flagged = outcomes.iter().filter(|o| o.error_detected).count();
    let generated = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (t!("html_report.title", locale = locale)) }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                h1 { (t!("html_report.main_header", locale = locale)) }
                div class="generated" { (t!("html_report.generated_at", locale = locale, time = generated)) }
                div class="summary-container" {
                    (summary_item(total, "", &t!("html_report.summary.total", locale = locale)))
                    (summary_item(passed, "passed-text", &t!("html_report.summary.passed", locale = locale)))
                    (summary_item(failed, "failed-text", &t!("html_report.summary.failed", locale = locale)))
                    (summary_item(flagged, "flagged-text", &t!("html_report.summary.flagged", locale = locale)))
                }
                table {
                    thead {
                        tr {
                            th { "#" }
                            th { (t!("html_report.table.header.command", locale = locale)) }
                            th { (t!("html_report.table.header.status", locale = locale)) }
                            th { (t!("html_report.table.header.exit_code", locale = locale)) }
                            th { (t!("html_report.table.header.duration", locale = locale)) }
                            th { (t!("html_report.table.header.flagged", locale = locale)) }
                        }
                    }
                    tbody {
                        @for (i, outcome) in outcomes.iter().enumerate() {
                            (outcome_row(i + 1, outcome, locale))
                        }
                    }
                }
            }
        }
    }
}

fn summary_item(count: usize, class: &str, label: &str) -> Markup {
    html! {
        div class="summary-item" {
            span class={ "count " (class) } { (count) }
            span class="label" { (label) }
        }
    }
}

fn outcome_row(index: usize, outcome: &Outcome, locale: &str) -> Markup {
    let exit_code = outcome
        .exit_code
        .map(|code| code.to_string())
        .or_else(|| outcome.failure_reason.map(|reason| reason.to_string()))
        .unwrap_or_default();

    html! {
        tr {
            td { (index) }
            td class="command" {
                (outcome.command)
                @if outcome.is_failure() {
                    details {
                        summary { (t!("html_report.toggle_output", locale = locale)) }
                        pre class="output-content" { (outcome.output_text()) }
                    }
                }
            }
            td {
                div class={ "status-cell " (outcome.get_status_class()) } {
                    (outcome.get_status_str(locale))
                }
            }
            td { (exit_code) }
            td { (format!("{:.2}s", outcome.duration.as_secs_f64())) }
            td { @if outcome.error_detected { "⚠" } }
        }
    }
}
