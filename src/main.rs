// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use gedcom_names::error::AppError;

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = logging::setup_logging(&args)?;
    tracing::debug!("Logs are being written to: {log_file_path}");

    commands::run(&args)
}
