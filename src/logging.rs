use crate::config::Config;
use crate::error::ApiError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up tracing for a consuming application.
///
/// Logs always go to a daily-rolling file (the configured `log_file_path`
/// or the default log directory); when `also_stdout` is set a second
/// ANSI-colored layer writes to stdout. Returns the log file path and the
/// guard that must be kept alive for the duration of the program to ensure
/// proper log flushing.
pub async fn init_logging(
    config: &Config,
    also_stdout: bool,
) -> Result<(String, WorkerGuard), ApiError> {
    let (log_dir, log_file_name) = match &config.log_file_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("bsports.log");
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), "bsports.log".to_string()),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            ApiError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive the program's logging lifetime so buffered
    // lines are flushed on exit.
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_filter = EnvFilter::from_default_env()
        .add_directive("bsports_core=info".parse().map_err(|e| {
            ApiError::log_setup_error(format!("Invalid log directive: {e}"))
        })?);

    let registry = tracing_subscriber::registry().with(
        fmt::Layer::new()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(file_filter),
    );

    if also_stdout {
        let stdout_filter = EnvFilter::from_default_env()
            .add_directive("bsports_core=info".parse().map_err(|e| {
                ApiError::log_setup_error(format!("Invalid log directive: {e}"))
            })?);
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(stdout_filter),
            )
            .init();
    } else {
        registry.init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
