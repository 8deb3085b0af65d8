use crate::cli::Args;
use gedcom_names::config::Config;
use gedcom_names::constants;
use gedcom_names::error::AppError;
use std::io::stderr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up logging configuration for the application.
///
/// Logs always go to a daily-rolling file; with `--debug` an additional
/// stderr layer is added so diagnostics stay out of the GEDCOM output on
/// stdout. The log location comes from `--log-file`, then the config file,
/// then the default log directory.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    let config_log_path = Config::load().ok().and_then(|config| config.log_file_path);

    let custom_log_path = args.log_file.as_ref().or(config_log_path.as_ref());
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(constants::LOG_FILE_NAME);
            (parent.to_path_buf(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), constants::LOG_FILE_NAME.to_string()),
    };

    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir).map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let directive = if args.debug {
        "gedcom_names=debug"
    } else {
        "gedcom_names=info"
    };

    let registry = tracing_subscriber::registry().with(
        fmt::Layer::new()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(
                EnvFilter::from_default_env().add_directive(
                    directive
                        .parse()
                        .map_err(|e| AppError::log_setup_error(format!("Bad log directive: {e}")))?,
                ),
            ),
    );

    if args.debug {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stderr)
                    .with_ansi(true)
                    .with_filter(
                        EnvFilter::from_default_env().add_directive(
                            directive.parse().map_err(|e| {
                                AppError::log_setup_error(format!("Bad log directive: {e}"))
                            })?,
                        ),
                    ),
            )
            .init();
    } else {
        registry.init();
    }

    let log_file_path = log_dir.join(&log_file_name);
    Ok((log_file_path.to_string_lossy().to_string(), guard))
}
