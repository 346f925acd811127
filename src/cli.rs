// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::{
    commands,
    infra::{resolve::RunArgs, t},
};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    let requested = args
        .iter()
        .position(|arg| arg == "--lang")
        .and_then(|pos| args.get(pos + 1))
        .map(String::as_str);
    crate::resolve_locale(requested)
}

fn string_arg(id: &'static str, help: String) -> Arg {
    Arg::new(id).long(id).help(help).action(ArgAction::Set)
}

fn flag_arg(id: &'static str, help: String) -> Arg {
    Arg::new(id).long(id).help(help).action(ArgAction::SetTrue)
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("e2e-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .arg(string_arg("lang", t!("cli.lang", locale = locale).to_string()).value_name("LANGUAGE"))
        .arg(
            string_arg("target", t!("arg.target", locale = locale).to_string())
                .short('t')
                .value_name("TARGET"),
        )
        .arg(
            string_arg("username", t!("arg.username", locale = locale).to_string())
                .short('u')
                .visible_alias("user")
                .value_name("USERNAME"),
        )
        .arg(
            string_arg("password", t!("arg.password", locale = locale).to_string())
                .short('p')
                .visible_alias("pass")
                .value_name("PASSWORD"),
        )
        .arg(flag_arg("kerberos", t!("arg.kerberos", locale = locale).to_string()).short('k'))
        .arg(flag_arg("verbose", t!("arg.verbose", locale = locale).to_string()).short('v'))
        .arg(flag_arg("errors", t!("arg.errors", locale = locale).to_string()).short('e'))
        .arg(flag_arg("poetry", t!("arg.poetry", locale = locale).to_string()))
        .arg(
            Arg::new("protocols")
                .long("protocols")
                .help(t!("arg.protocols", locale = locale).to_string())
                .value_name("PROTOCOL")
                .num_args(1..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("line-nums")
                .long("line-nums")
                .help(t!("arg.line_nums", locale = locale).to_string())
                .value_name("LINES")
                .num_args(1..)
                .action(ArgAction::Append),
        )
        .arg(flag_arg("print-failures", t!("arg.print_failures", locale = locale).to_string()))
        .arg(
            string_arg("test-user-file", t!("arg.test_user_file", locale = locale).to_string())
                .value_name("PATH"),
        )
        .arg(
            string_arg(
                "test-password-file",
                t!("arg.test_password_file", locale = locale).to_string(),
            )
            .value_name("PATH"),
        )
        .arg(string_arg("dns-server", t!("arg.dns_server", locale = locale).to_string()).value_name("DNS"))
        .arg(
            string_arg("commands-file", t!("arg.commands_file", locale = locale).to_string())
                .short('c')
                .value_name("PATH"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help(t!("arg.config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            string_arg("version-cmd", t!("arg.version_cmd", locale = locale).to_string())
                .value_name("COMMAND"),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .help(t!("arg.html", locale = locale).to_string())
                .value_name("HTML")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

/// Collects the raw values of a parsed command line.
pub fn run_args_from_matches(matches: &ArgMatches) -> RunArgs {
    let string = |id: &str| matches.get_one::<String>(id).cloned();
    let strings = |id: &str| -> Vec<String> {
        matches
            .get_many::<String>(id)
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    };

    RunArgs {
        target: string("target"),
        username: string("username"),
        password: string("password"),
        kerberos: matches.get_flag("kerberos"),
        verbose: matches.get_flag("verbose"),
        show_errors: matches.get_flag("errors"),
        poetry: matches.get_flag("poetry"),
        print_failures: matches.get_flag("print-failures"),
        protocols: strings("protocols"),
        line_nums: strings("line-nums"),
        test_user_file: string("test-user-file"),
        test_password_file: string("test-password-file"),
        dns_server: string("dns-server"),
        commands_file: string("commands-file"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        version_cmd: string("version-cmd"),
        html: matches.get_one::<PathBuf>("html").cloned(),
        lang: string("lang"),
    }
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();
    commands::run::execute(run_args_from_matches(&matches)).await
}
