//! Core library entry for the `taskboard` CLI.
//!
//! [`ports::TaskApi`] is the data-access layer for the remote task service;
//! [`controller::TaskListController`] holds the task list and stats a view
//! renders, refetching both after every mutation.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod ports;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing, configuration, or command
/// execution fails.
pub async fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are not failures.
        Err(err) if !err.use_stderr() => return err.print().map_err(|e| e.to_string()),
        Err(err) => return Err(err.to_string()),
    };
    let settings = config::Settings::from_env()?;
    logging::init(&settings);
    commands::dispatch(&cli.command, &settings).await
}
