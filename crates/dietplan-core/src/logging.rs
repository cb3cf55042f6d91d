//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "DIETPLAN_LOG";

const DEFAULT_FILTER: &str = "diet_planner=info,dietplan_app=info,dietplan_api=info,warn";
/// Rotation appends the date: `dietplan.log.YYYY-MM-DD`
const LOG_FILE_PREFIX: &str = "dietplan.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/diet-planner/logs/` because the
/// terminal itself is owned by the TUI.
/// Log level is controlled by the `DIETPLAN_LOG` environment variable.
///
/// # Examples
/// ```bash
/// DIETPLAN_LOG=debug cargo run
/// DIETPLAN_LOG=dietplan_api=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Diet Planner starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("diet-planner").join("logs"))
}
