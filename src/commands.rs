//! Top-level commands invoked by the CLI.

pub mod run;
