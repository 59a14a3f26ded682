//! Task manager CLI entry point

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use recordstore::{CredentialStore, TaskStore};
use taskmanager::cli::Cli;
use taskmanager::config::Config;
use taskmanager::menu::MenuSession;
use taskmanager::service::TaskService;

fn setup_logging(verbose: bool) -> Result<()> {
    // Log to a file so tracing output never interleaves with the prompt.
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskmanager")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("taskmanager.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(user_file) = cli.user_file {
        config.user_file = user_file;
    }
    if let Some(task_file) = cli.task_file {
        config.task_file = task_file;
    }

    info!(
        user_file = %config.user_file.display(),
        task_file = %config.task_file.display(),
        "task manager starting"
    );

    let credentials = CredentialStore::open(&config.user_file).context("Failed to open credential file")?;
    let tasks = TaskStore::open(&config.task_file).context("Failed to open task file")?;

    let mut menu = MenuSession::new(credentials, TaskService::new(tasks))?;
    menu.run()
}
