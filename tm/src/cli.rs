//! CLI argument parsing for the task manager

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tm")]
#[command(author, version, about = "Interactive task manager with a login gate", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the credential file path
    #[arg(long)]
    pub user_file: Option<PathBuf>,

    /// Override the task file path
    #[arg(long)]
    pub task_file: Option<PathBuf>,

    /// Log at DEBUG level
    #[arg(short, long)]
    pub verbose: bool,
}
